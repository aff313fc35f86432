use std::sync::Arc;
use std::thread;

use bordered::{Buffer, Color, Edge, EdgeSet, Rect};
use validfield::validation::rules;
use validfield::widgets::Font;
use validfield::{
    ConfigError, FieldConfig, FieldEvent, InlineScheduler, OwnerScheduler, ValidationField,
    ValidationError, ValidationState, owner,
};

const TEXT: Color = Color::rgb(40, 40, 40);
const EDITING: Color = Color::rgb(149, 165, 166);
const ERROR: Color = Color::rgb(210, 77, 87);
const VALID: Color = Color::rgb(101, 198, 187);

fn name_config() -> FieldConfig {
    FieldConfig::new(TEXT, EdgeSet::BOTTOM, 4.0)
        .editing_color(EDITING)
        .error_color(ERROR)
        .valid_color(VALID)
        .message_font(Font::new(10.0, 12.0))
}

fn name_field() -> ValidationField {
    name_field_on(Arc::new(InlineScheduler))
}

fn name_field_on(owner: Arc<dyn OwnerScheduler>) -> ValidationField {
    let field =
        ValidationField::new(Rect::new(10.0, 20.0, 200.0, 30.0), name_config(), owner).unwrap();
    field.add_neutral_trigger(rules::blank());
    field.add_error_trigger(
        |text| {
            let text = text.to_lowercase();
            text.contains("lannister") && !text.contains("tyrion")
        },
        "No Lannisters allowed!",
    );
    field
}

fn border_color(field: &ValidationField) -> Color {
    let parts = field.parts();
    parts
        .input
        .surface()
        .overlays()
        .get(Edge::Bottom)
        .unwrap()
        .color
        .clone()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_field_paints_initial_border() {
    let field = name_field();
    let parts = field.parts();
    let overlays = parts.input.surface().overlays();

    assert_eq!(overlays.len(), 1);
    let bottom = overlays.get(Edge::Bottom).unwrap();
    assert_eq!(bottom.frame, Rect::new(0.0, 26.0, 200.0, 4.0));
    assert_eq!(bottom.color, TEXT);
    assert!(parts.label.is_hidden());
    assert_eq!(field.state(), ValidationState::Neutral);
}

#[test]
fn test_unset_colors_fall_back_to_initial_color() {
    let colors = FieldConfig::new(TEXT, EdgeSet::ALL, 1.0)
        .error_color(ERROR)
        .colors();

    assert_eq!(colors.neutral, TEXT);
    assert_eq!(colors.valid, TEXT);
    assert_eq!(colors.editing, TEXT);
    assert_eq!(colors.error, ERROR);
}

#[test]
fn test_negative_border_width_is_rejected() {
    let result = ValidationField::new(
        Rect::from_size(10.0, 10.0),
        FieldConfig::new(TEXT, EdgeSet::ALL, -1.0),
        Arc::new(InlineScheduler),
    );
    assert!(matches!(result, Err(ConfigError::InvalidBorderWidth(w)) if w == -1.0));
}

#[test]
fn test_zero_line_height_is_rejected() {
    let config = FieldConfig::new(TEXT, EdgeSet::ALL, 1.0).message_font(Font::new(10.0, 0.0));
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidLineHeight(0.0))
    );
}

#[test]
fn test_non_finite_width_is_rejected() {
    let config = FieldConfig::new(TEXT, EdgeSet::ALL, f32::INFINITY);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBorderWidth(_))
    ));
}

#[test]
fn test_non_finite_message_gap_is_rejected() {
    let config = FieldConfig::new(TEXT, EdgeSet::BOTTOM, 1.0).message_gap(f32::NAN);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMessageGap(gap)) if gap.is_nan()
    ));

    let result = ValidationField::new(
        Rect::from_size(10.0, 3.0),
        FieldConfig::new(TEXT, EdgeSet::BOTTOM, 1.0).message_gap(f32::INFINITY),
        Arc::new(InlineScheduler),
    );
    assert!(matches!(result, Err(ConfigError::InvalidMessageGap(_))));
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_label_sits_below_input() {
    let field = name_field();
    assert_eq!(field.message_frame(), Rect::new(10.0, 55.0, 200.0, 12.0));
}

#[test]
fn test_reframe_is_idempotent() {
    let field = name_field();
    field.reframe();
    let first = field.message_frame();
    field.reframe();
    assert_eq!(field.message_frame(), first);
}

#[test]
fn test_reframe_follows_resized_input() {
    let field = name_field();
    field.set_frame(Rect::new(0.0, 0.0, 320.0, 44.0));

    // The label does not move until reframe is called.
    assert_eq!(field.message_frame(), Rect::new(10.0, 55.0, 200.0, 12.0));

    field.reframe();
    assert_eq!(field.message_frame(), Rect::new(0.0, 49.0, 320.0, 12.0));

    let parts = field.parts();
    let bottom = parts.input.surface().overlays().get(Edge::Bottom).unwrap();
    assert_eq!(bottom.frame, Rect::new(0.0, 40.0, 320.0, 4.0));
    assert_eq!(parts.input.surface().overlays().len(), 1);
}

#[test]
fn test_setting_font_reframes_label() {
    let field = name_field();
    field.set_message_font(Font::new(14.0, 18.0));

    assert_eq!(field.message_font(), Font::new(14.0, 18.0));
    assert_eq!(field.message_frame().height, 18.0);
}

#[test]
fn test_custom_message_gap() {
    let field = ValidationField::new(
        Rect::new(0.0, 0.0, 20.0, 3.0),
        FieldConfig::new(TEXT, EdgeSet::BOTTOM, 1.0)
            .message_font(Font::new(1.0, 1.0))
            .message_gap(0.0),
        Arc::new(InlineScheduler),
    )
    .unwrap();

    assert_eq!(field.message_frame(), Rect::new(0.0, 3.0, 20.0, 1.0));
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_editing_session_flow() {
    let field = name_field();

    assert_eq!(field.handle_event(FieldEvent::EditingBegan).await, Ok(None));
    assert_eq!(border_color(&field), EDITING);

    let changed = FieldEvent::Changed("Cersei Lannister".to_string());
    assert_eq!(field.handle_event(changed).await, Ok(None));
    assert_eq!(field.text(), "Cersei Lannister");

    let ended = field.handle_event(FieldEvent::EditingEnded).await;
    assert_eq!(ended, Ok(Some(ValidationState::Error)));
    assert_eq!(border_color(&field), ERROR);

    let parts = field.parts();
    assert!(!parts.label.is_hidden());
    assert_eq!(parts.label.text(), Some("No Lannisters allowed!"));
    assert_eq!(parts.label.color(), &ERROR);
}

#[tokio::test]
async fn test_lannister_scenario_end_to_end() {
    let field = name_field();

    assert_eq!(field.validate().await, Ok(ValidationState::Neutral));
    assert_eq!(field.message(), None);
    assert_eq!(border_color(&field), TEXT);

    field.set_text("Cersei Lannister");
    assert_eq!(field.validate().await, Ok(ValidationState::Error));
    assert_eq!(field.message().as_deref(), Some("No Lannisters allowed!"));
    assert_eq!(border_color(&field), ERROR);

    field.set_text("Tyrion Lannister");
    assert_eq!(field.on_editing_ended().await, Ok(ValidationState::Valid));
    assert_eq!(field.message(), None);
    assert_eq!(border_color(&field), VALID);
    assert!(field.parts().label.is_hidden());
    assert_eq!(field.parts().label.color(), &VALID);
}

#[tokio::test]
async fn test_revalidation_never_duplicates_overlays() {
    let field = name_field();
    for text in ["", "Jaime Lannister", "Arya Stark", "", "Tyrion Lannister"] {
        field.set_text(text);
        field.on_editing_began().unwrap();
        field.on_editing_ended().await.unwrap();
    }
    assert_eq!(field.parts().input.surface().overlays().len(), 1);
}

#[tokio::test]
async fn test_async_and_message_triggers() {
    let field = name_field();
    field.add_neutral_trigger_async(|text: String| async move { text == "pending" });
    field.add_neutral_trigger_with_message(|text| text.ends_with('.'), "Drop the period");
    field.add_error_trigger_async(|text: String| async move { text.ends_with('?') }, "Not sure?");

    field.set_text("pending");
    assert_eq!(field.validate().await, Ok(ValidationState::Neutral));
    assert_eq!(field.message(), None);

    field.set_text("Arya Stark.");
    assert_eq!(field.validate().await, Ok(ValidationState::Neutral));
    assert_eq!(field.message().as_deref(), Some("Drop the period"));
    assert!(!field.parts().label.is_hidden());

    field.set_text("Arya?");
    assert_eq!(field.validate().await, Ok(ValidationState::Error));
    assert_eq!(field.message().as_deref(), Some("Not sure?"));
    assert_eq!(border_color(&field), ERROR);
}

// ============================================================================
// Owner Thread Tests
// ============================================================================

#[tokio::test]
async fn test_changed_text_waits_for_owner() {
    let (handle, mut owner_loop) = owner::channel();
    let field = name_field_on(Arc::new(handle));

    let changed = field.handle_event(FieldEvent::Changed("Arya Stark".to_string()));
    let drive_owner = async {
        // The change is queued but not applied until the owner runs it.
        assert_eq!(field.text(), "");
        assert_eq!(owner_loop.run_pending(), 1);
        assert_eq!(field.text(), "Arya Stark");
    };
    let (result, ()) = tokio::join!(changed, drive_owner);

    assert_eq!(result, Ok(None));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_events_from_worker_with_dedicated_owner_thread() {
    let (handle, owner_loop) = owner::channel();
    let owner = thread::spawn(move || owner_loop.run_blocking());
    let field = name_field_on(Arc::new(handle));

    field.handle_event(FieldEvent::EditingBegan).await.unwrap();
    let changed = FieldEvent::Changed("Jaime Lannister".to_string());
    assert_eq!(field.handle_event(changed).await, Ok(None));

    let ended = field.handle_event(FieldEvent::EditingEnded).await;
    assert_eq!(ended, Ok(Some(ValidationState::Error)));
    assert_eq!(field.message().as_deref(), Some("No Lannisters allowed!"));

    drop(field);
    owner.join().unwrap();
}

#[tokio::test]
async fn test_changed_text_with_dropped_owner_fails() {
    let (handle, owner_loop) = owner::channel();
    let field = name_field_on(Arc::new(handle));
    drop(owner_loop);

    let changed = field.handle_event(FieldEvent::Changed("Arya Stark".to_string()));
    assert_eq!(changed.await, Err(ValidationError::OwnerGone));
    assert_eq!(field.text(), "");
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[tokio::test]
async fn test_rasterize_shows_message_under_input() {
    let field = ValidationField::new(
        Rect::new(0.0, 0.0, 24.0, 3.0),
        FieldConfig::new(TEXT, EdgeSet::BOTTOM, 1.0)
            .error_color(ERROR)
            .message_font(Font::new(1.0, 1.0))
            .message_gap(0.0),
        Arc::new(InlineScheduler),
    )
    .unwrap();
    field.add_error_trigger(|text| text.contains('!'), "no bangs");
    field.set_text("hi!");
    field.validate().await.unwrap();

    let mut buf = Buffer::new(24, 4);
    field.rasterize(&mut buf);

    let lines = buf.lines();
    assert!(lines[1].contains("hi!"));
    assert_eq!(lines[3].trim(), "no bangs");
    assert_eq!(buf.get(0, 2).unwrap().bg, ERROR.to_rgb());
    let start = lines[3].find('n').unwrap() as u16;
    assert_eq!(buf.get(start, 3).unwrap().fg, ERROR.to_rgb());
}
