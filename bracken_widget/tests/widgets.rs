// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the built-in widgets and the shared widget plumbing.
//!
//! The reference backend has a 6.0 per-character advance and a 9.0 line
//! height, so expected geometry is computed by hand throughout.

use bracken_backend_ref::{DrawCmd, RefSurface, RefTextLayout, RefTranslator};
use bracken_position::Position;
use bracken_tooltip::TooltipQueue;
use bracken_widget::{
    Border, Button, Key, Label, LineBorder, MouseButton, RenderContext, Separator, Widget,
    separator,
};
use kurbo::{Point, Rect};
use std::cell::Cell;
use std::rc::Rc;

fn render_frame(
    widget: &mut dyn Widget,
    surface: &mut RefSurface,
    tooltips: &mut TooltipQueue,
    tick: u64,
    mouse: Point,
) {
    let layout = RefTextLayout::default();
    let mut ctx = RenderContext {
        text: &layout,
        surface,
        tooltips,
        tick,
    };
    widget.render(&mut ctx, mouse, 0.0);
}

#[test]
fn hover_is_recomputed_on_every_render() {
    let layout = RefTextLayout::default();
    let mut label = Label::new(Position::origin(10.0, 10.0), "hello", 120.0, &layout);
    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::new();

    // "hello" is 30.0 wide, 11.0 tall, at (10, 10): bounds [10, 40) x [10, 21).
    render_frame(&mut label, &mut surface, &mut tooltips, 1, Point::new(10.0, 10.0));
    assert!(label.state().is_hovered());

    // Edge coordinates are exclusive.
    render_frame(&mut label, &mut surface, &mut tooltips, 2, Point::new(40.0, 10.0));
    assert!(!label.state().is_hovered());

    // Prior state is irrelevant; back inside flips it again.
    render_frame(&mut label, &mut surface, &mut tooltips, 3, Point::new(39.9, 20.9));
    assert!(label.state().is_hovered());
}

#[test]
fn centered_label_offsets_its_position() {
    let layout = RefTextLayout::default();
    // base_x = 10, max_width = 120; "hello" is 30 wide.
    let mut label = Label::new(Position::origin(10.0, 0.0), "hello", 120.0, &layout);
    assert_eq!(label.state().position().relative_x(), 10.0);

    label.set_centered(true, &layout);
    // base_x + max_width / 2 - text_width / 2 = 10 + 60 - 15.
    assert_eq!(label.state().position().relative_x(), 55.0);

    label.set_centered(false, &layout);
    assert_eq!(label.state().position().relative_x(), 10.0);
}

#[test]
fn set_text_relayouts_in_place() {
    let layout = RefTextLayout::default();
    let mut label = Label::new(Position::origin(0.0, 0.0), "hi", 60.0, &layout);
    assert_eq!(label.state().width(), 12.0);
    assert_eq!(label.state().height(), 11.0);

    // "alpha beta" cannot fit on one 60.0-wide line: two lines, widest 30.0.
    label.set_text("alpha beta", &layout);
    assert_eq!(label.state().width(), 30.0);
    assert_eq!(label.state().height(), 20.0);
}

#[test]
fn label_consumes_primary_clicks_only_with_an_action_and_hover() {
    let layout = RefTextLayout::default();
    let mut label = Label::new(Position::origin(0.0, 0.0), "click me", 120.0, &layout);
    assert!(!label.requires_cursor());

    let fired = Rc::new(Cell::new(0u32));
    let seen = fired.clone();
    label.set_action(move |_| seen.set(seen.get() + 1));
    assert!(label.requires_cursor());

    // Not hovered yet: the click falls through.
    assert!(!label.mouse_clicked(Point::new(1.0, 1.0), MouseButton::Primary));
    assert_eq!(fired.get(), 0);

    label.mouse_moved(Point::new(1.0, 1.0));
    assert!(!label.mouse_clicked(Point::new(1.0, 1.0), MouseButton::Secondary));
    assert!(label.mouse_clicked(Point::new(1.0, 1.0), MouseButton::Primary));
    assert_eq!(fired.get(), 1);
}

#[test]
fn hidden_or_disabled_widgets_never_consume_input() {
    let mut button = Button::new(Position::origin(0.0, 0.0), 100.0, "ok", |_| {});
    button.mouse_moved(Point::new(5.0, 5.0));

    button.state_mut().set_enabled(false);
    assert!(!button.mouse_clicked(Point::new(5.0, 5.0), MouseButton::Primary));

    button.state_mut().set_enabled(true);
    button.state_mut().set_visible(false);
    assert!(!button.mouse_clicked(Point::new(5.0, 5.0), MouseButton::Primary));

    button.state_mut().set_visible(true);
    assert!(button.mouse_clicked(Point::new(5.0, 5.0), MouseButton::Primary));
}

#[test]
fn button_activates_from_the_keyboard_only_while_focused() {
    let pressed = Rc::new(Cell::new(0u32));
    let seen = pressed.clone();
    let mut button = Button::new(Position::origin(0.0, 0.0), 100.0, "ok", move |_| {
        seen.set(seen.get() + 1);
    });

    assert!(!button.key_pressed(Key::Enter));
    assert_eq!(pressed.get(), 0);

    button.state_mut().set_focused(true);
    assert!(button.key_pressed(Key::Enter));
    assert!(button.key_pressed(Key::Space));
    assert!(!button.key_pressed(Key::Tab));
    assert_eq!(pressed.get(), 2);
}

#[test]
fn button_message_updates_in_place_without_moving_bounds() {
    let mut button = Button::new(Position::origin(5.0, 5.0), 100.0, "before", |_| {});
    let bounds = button.state().bounds();
    button.set_message("a considerably longer message");
    assert_eq!(button.state().bounds(), bounds);
    assert_eq!(button.message().to_plain(), "a considerably longer message");
}

#[test]
fn line_border_fills_four_strips_without_corner_overlap() {
    let layout = RefTextLayout::default();
    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::new();
    let mut ctx = RenderContext {
        text: &layout,
        surface: &mut surface,
        tooltips: &mut tooltips,
        tick: 0,
    };

    let color = bracken_backend::palette::WHITE;
    let border = LineBorder::new(2.0, color);
    border.render(
        &mut ctx,
        Rect::new(0.0, 0.0, 100.0, 20.0),
        Point::new(-1.0, -1.0),
        0.0,
    );

    // Top and bottom span the full width; the sides fill the remainder, so
    // no corner is filled twice.
    assert_eq!(
        surface.cmds(),
        &[
            DrawCmd::Rect {
                rect: Rect::new(0.0, 0.0, 100.0, 2.0),
                color,
            },
            DrawCmd::Rect {
                rect: Rect::new(0.0, 18.0, 100.0, 20.0),
                color,
            },
            DrawCmd::Rect {
                rect: Rect::new(0.0, 2.0, 2.0, 18.0),
                color,
            },
            DrawCmd::Rect {
                rect: Rect::new(98.0, 2.0, 100.0, 18.0),
                color,
            },
        ]
    );
}

#[test]
fn separator_draws_a_full_line_without_a_title() {
    let mut separator = Separator::new(Position::origin(0.0, 0.0), 100.0, None);
    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::new();
    render_frame(&mut separator, &mut surface, &mut tooltips, 1, Point::new(-1.0, -1.0));

    assert_eq!(
        surface.cmds(),
        &[DrawCmd::Rect {
            rect: Rect::new(0.0, 4.0, 100.0, 6.0),
            color: bracken_backend::palette::TEXT,
        }]
    );
}

#[test]
fn separator_centers_its_title_between_line_segments() {
    let mut separator = Separator::new(
        Position::origin(0.0, 0.0),
        100.0,
        Some("Hi".into()),
    );
    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::new();
    render_frame(&mut separator, &mut surface, &mut tooltips, 1, Point::new(-1.0, -1.0));

    // "Hi" is 12.0 wide, so the title starts at 44.0.
    assert_eq!(surface.drawn_text(), vec!["Hi"]);
    assert_eq!(
        surface.cmds()[0],
        DrawCmd::Rect {
            rect: Rect::new(0.0, 4.0, 39.0, 6.0),
            color: bracken_backend::palette::TEXT,
        }
    );
    assert_eq!(
        surface.cmds()[1],
        DrawCmd::Rect {
            rect: Rect::new(61.0, 4.0, 100.0, 6.0),
            color: bracken_backend::palette::TEXT,
        }
    );
}

#[test]
fn separator_narration_uses_the_translated_pattern() {
    let i18n = RefTranslator::new().with(separator::NARRATION_KEY, "Separator: %s");
    let mut sep = Separator::new(Position::origin(0.0, 0.0), 100.0, Some("General".into()));
    assert_eq!(
        sep.narration_message(&i18n).as_deref(),
        Some("Separator: General")
    );

    // An empty or absent title suppresses narration entirely.
    sep.set_title(Some("".into()));
    assert!(sep.narration_message(&i18n).is_none());
    sep.set_title(None);
    assert!(sep.narration_message(&i18n).is_none());
}

#[test]
fn separator_takes_focus_only_with_a_tooltip() {
    let mut sep = Separator::new(Position::origin(0.0, 0.0), 100.0, None);
    assert!(!sep.requires_cursor());
    sep.state_mut().set_tooltip(Some("about this section".into()));
    assert!(sep.requires_cursor());
}

#[test]
fn hovered_widget_queues_its_tooltip_after_the_delay() {
    let layout = RefTextLayout::default();
    let mut label = Label::new(Position::origin(0.0, 0.0), "hello", 120.0, &layout);
    label.state_mut().set_tooltip(Some("a hint".into()));

    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::with_delay(2);
    let inside = Point::new(1.0, 1.0);

    render_frame(&mut label, &mut surface, &mut tooltips, 1, inside);
    assert!(tooltips.pending().is_none());
    render_frame(&mut label, &mut surface, &mut tooltips, 2, inside);
    let tip = tooltips.pending().expect("tooltip due at the threshold");
    assert_eq!(tip.position, inside);
    assert_eq!(tip.lines, vec!["a hint"]);
}

#[test]
fn clearing_the_tooltip_resets_accumulation() {
    let layout = RefTextLayout::default();
    let mut label = Label::new(Position::origin(0.0, 0.0), "hello", 120.0, &layout);
    label.state_mut().set_tooltip(Some("a hint".into()));

    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::with_delay(2);
    let inside = Point::new(1.0, 1.0);

    render_frame(&mut label, &mut surface, &mut tooltips, 1, inside);
    assert!(tooltips.pending().is_none());

    // Clearing the tooltip drops the accumulated tick.
    label.state_mut().set_tooltip(None);
    render_frame(&mut label, &mut surface, &mut tooltips, 2, inside);

    // A restored tooltip waits out the full delay again.
    label.state_mut().set_tooltip(Some("a hint".into()));
    render_frame(&mut label, &mut surface, &mut tooltips, 3, inside);
    assert!(tooltips.pending().is_none());
    render_frame(&mut label, &mut surface, &mut tooltips, 4, inside);
    assert!(tooltips.pending().is_some());
}

#[test]
fn render_order_decides_same_frame_tooltip_contention() {
    let layout = RefTextLayout::default();
    // Two overlapping labels, both hovered, both with tooltips.
    let mut first = Label::new(Position::origin(0.0, 0.0), "one", 120.0, &layout);
    first.state_mut().set_tooltip(Some("first tip".into()));
    let mut second = Label::new(Position::origin(0.0, 0.0), "two", 120.0, &layout);
    second.state_mut().set_tooltip(Some("second tip".into()));

    let mut surface = RefSurface::default();
    let mut tooltips = TooltipQueue::with_delay(1);
    let inside = Point::new(1.0, 1.0);
    render_frame(&mut first, &mut surface, &mut tooltips, 1, inside);
    render_frame(&mut second, &mut surface, &mut tooltips, 1, inside);

    assert_eq!(tooltips.take().unwrap().lines, vec!["second tip"]);
}

#[test]
fn narration_suppressed_for_empty_label() {
    let layout = RefTextLayout::default();
    let i18n = RefTranslator::new();
    let label = Label::new(Position::origin(0.0, 0.0), "hello", 120.0, &layout);
    assert_eq!(label.narration_message(&i18n).as_deref(), Some("hello"));

    let empty = Label::new(Position::origin(0.0, 0.0), "", 120.0, &layout);
    assert!(empty.narration_message(&i18n).is_none());
}
