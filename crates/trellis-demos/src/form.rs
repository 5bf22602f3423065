//! A small sign-in form laid out with the poser.

use trellis::{
    Background, BorderStyle, Colour, Config, Event, EventKind, Poser, Result, Surface, Tree,
    TypedId, VAlign, WindowId,
    geom::Expanse,
    rgb,
};
use trellis_widgets::{Button, Entry, Image, Label};

/// Handles to the interesting windows of the form.
#[derive(Debug, Clone, Copy)]
pub struct Form {
    /// Outset panel holding everything else.
    pub panel: WindowId,
    /// Heading.
    pub title: TypedId<Label>,
    /// Name input.
    pub name: TypedId<Entry>,
    /// Submit button.
    pub submit: TypedId<Button>,
    /// Greeting shown after a submit.
    pub status: TypedId<Label>,
    /// Decorative gradient.
    pub swatch: TypedId<Image>,
}

/// Build the form under the root of `tree`.
pub fn build(tree: &mut Tree) -> Result<Form> {
    let root = tree.root();
    let panel = tree.add(
        root,
        &Config::new()
            .width(1.0)
            .height(1.0)
            .padding(8)
            .border_width(2)
            .border_style(BorderStyle::Outset),
    )?;

    let title = Label::create(
        tree,
        panel,
        &Config::new().text("Sign in").font_size(18).bold(true),
    )?;
    let prompt = Label::create(tree, panel, &Config::new().text("Name:").padding(2))?;
    Poser::new(tree, prompt).below(&[title.id()])?;

    let name = Entry::create(tree, panel, &Config::new().width(0.5).max_length(24))?;
    Poser::new(tree, name)
        .right_of(&[prompt.id()])?
        .align_vertical(prompt, VAlign::Middle)?;

    let submit = Button::create(
        tree,
        panel,
        &Config::new()
            .text("Submit")
            .padding(3)
            .border_width(1)
            .border_style(BorderStyle::Outset),
    )?;
    Poser::new(tree, submit)
        .below(&[name.id()])?
        .right_of(&[prompt.id()])?;

    let status = Label::create(
        tree,
        panel,
        &Config::new()
            .font_colour(rgb!("#202080"))
            .background(Background::Transparent),
    )?;
    Poser::new(tree, status).below(&[submit.id()])?;

    let swatch = tree.create(
        panel,
        Image::new(gradient(Expanse::new(32, 32))),
        &Config::new().border_width(1),
    )?;
    Poser::new(tree, swatch)
        .right_of(&[name.id()])?
        .align_vertical(name, VAlign::Top)?;

    // The entry's width follows the panel, so a resize has to ripple through
    // everything placed against it.
    tree.bind(root, EventKind::Reconfigure, move |tree, _, _| {
        for id in [panel, title.id(), prompt.id(), name.id(), submit.id()] {
            tree.trigger(id, &Event::Reconfigure)?;
        }
        Ok(())
    })?;

    tree.bind(submit, EventKind::Click, move |tree, _, _| {
        let value = tree.widget::<Entry>(name)?.value().to_owned();
        let greeting = if value.is_empty() {
            "Who are you?".to_owned()
        } else {
            format!("Hello, {value}!")
        };
        tree.with_widget(status, |l: &mut Label| l.set_text(greeting))
    })?;

    Ok(Form {
        panel,
        title,
        name,
        submit,
        status,
        swatch,
    })
}

/// A red-to-green, top-to-bottom gradient.
fn gradient(size: Expanse) -> Surface {
    let mut s = Surface::new(size);
    let w = size.w.max(1);
    let h = size.h.max(1);
    for y in 0..size.h {
        for x in 0..size.w {
            let r = (x * 255 / w) as u8;
            let g = (y * 255 / h) as u8;
            s.set((x as i32, y as i32), Colour::rgb(r, g, 160));
        }
    }
    s
}
