use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use bordered::{Buffer, Rgb};
use crossterm::queue;
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use validfield::owner::{self, OwnerHandle};
use validfield::prelude::*;

const BUFFER_WIDTH: u16 = 40;
const BUFFER_HEIGHT: u16 = 6;

/// Names typed into the field, one editing session each.
const SESSIONS: [&str; 5] = [
    "",
    "Cersei Lannister",
    "Tyrion Lannister",
    "Jaime Lannister",
    "Arya Stark",
];

/// No Lannisters allowed. Except Tyrion.
fn is_lannister(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains("lannister") && !text.contains("tyrion")
}

fn name_field(owner: OwnerHandle) -> Result<ValidationField, ConfigError> {
    let config = FieldConfig::new(Color::rgb(220, 220, 220), EdgeSet::BOTTOM, 1.0)
        .editing_color(Color::rgb(149, 165, 166))
        .error_color(Color::rgb(210, 77, 87))
        .valid_color(Color::rgb(101, 198, 187))
        .message_font(Font::new(1.0, 1.0))
        .message_gap(1.0);

    let field = ValidationField::new(Rect::new(2.0, 0.0, 36.0, 3.0), config, Arc::new(owner))?;
    field.add_neutral_trigger(rules::blank());
    field.add_error_trigger(is_lannister, "No Lannisters allowed!");
    Ok(field)
}

fn to_term(rgb: Rgb) -> style::Color {
    style::Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn draw(field: &ValidationField, caption: &str) -> io::Result<()> {
    let mut buf = Buffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    field.rasterize(&mut buf);

    let mut out = io::stdout().lock();
    queue!(out, Print(format!("{caption}\n")))?;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else { continue };
            if cell.wide_continuation {
                continue;
            }
            queue!(
                out,
                SetBackgroundColor(to_term(cell.bg)),
                SetForegroundColor(to_term(cell.fg)),
                Print(cell.char)
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

/// Ask the owner thread to draw the field.
fn schedule_draw(
    owner: &OwnerHandle,
    field: &Arc<ValidationField>,
    caption: String,
) -> Result<(), ValidationError> {
    let field = Arc::clone(field);
    owner.run_on_owner(Box::new(move || {
        if let Err(e) = draw(&field, &caption) {
            error!("draw failed: {}", e);
        }
    }))
}

async fn run_sessions(
    field: Arc<ValidationField>,
    owner: OwnerHandle,
) -> Result<(), ValidationError> {
    for name in SESSIONS {
        field.handle_event(FieldEvent::EditingBegan).await?;
        field
            .handle_event(FieldEvent::Changed(name.to_string()))
            .await?;
        schedule_draw(&owner, &field, format!("editing: {name:?}"))?;

        if let Some(state) = field.handle_event(FieldEvent::EditingEnded).await? {
            info!("{name:?} -> {state}");
            schedule_draw(&owner, &field, format!("{name:?} is {state}"))?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("validfield-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let (handle, owner_loop) = owner::channel();

    // This thread owns the field and runs every commit and draw.
    let field = Arc::new(name_field(handle.clone())?);
    let sessions = runtime.spawn(run_sessions(field, handle));

    owner_loop.run_blocking();

    runtime.block_on(sessions)??;
    Ok(())
}
