#![forbid(unsafe_code)]

//! Toast notifications.
//!
//! A [`ToastStack`] owns the queue: newest toast first, a cap on how
//! many render at once, and tick-based expiry. All timing flows through
//! `Instant` values passed in by the caller, so expiry is deterministic
//! in tests (no sleeping, no wall-clock reads inside the logic).

use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthStr;
use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::{Widget, draw_text_span, fill_area};

/// Default time a toast stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Identifier for a queued toast, for targeted dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Severity of a toast, picking its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    fn accent(self) -> PackedRgba {
        match self {
            ToastSeverity::Info => PackedRgba::rgb(130, 190, 245),
            ToastSeverity::Success => PackedRgba::rgb(120, 210, 140),
            ToastSeverity::Warning => PackedRgba::rgb(235, 195, 90),
            ToastSeverity::Error => PackedRgba::rgb(235, 110, 110),
        }
    }

    fn glyph(self) -> char {
        match self {
            ToastSeverity::Info => 'ℹ',
            ToastSeverity::Success => '✓',
            ToastSeverity::Warning => '!',
            ToastSeverity::Error => '✗',
        }
    }
}

/// A toast description before it is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    title: Option<String>,
    severity: ToastSeverity,
    /// `None` means persistent until dismissed.
    duration: Option<Duration>,
}

impl Toast {
    /// Create an info toast with the default duration.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            severity: ToastSeverity::Info,
            duration: Some(DEFAULT_TOAST_DURATION),
        }
    }

    /// Builder: set a title line.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the severity.
    #[must_use]
    pub fn severity(mut self, severity: ToastSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Builder: override how long the toast stays visible.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Builder: keep the toast until explicitly dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    id: ToastId,
    toast: Toast,
    expires_at: Option<Instant>,
}

/// The toast queue plus its rendering.
#[derive(Debug, Clone)]
pub struct ToastStack {
    active: Vec<ActiveToast>,
    next_id: u64,
    max_visible: usize,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStack {
    /// Create an empty stack showing at most 3 toasts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
            max_visible: 3,
        }
    }

    /// Builder: cap on simultaneously rendered toasts.
    #[must_use]
    pub fn with_max_visible(mut self, n: usize) -> Self {
        self.max_visible = n;
        self
    }

    /// Queue a toast. `now` anchors its expiry.
    pub fn push(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let expires_at = toast.duration.map(|d| now + d);
        self.active.push(ActiveToast {
            id,
            toast,
            expires_at,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.0, "toast queued");
        id
    }

    /// Dismiss a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.active.retain(|t| t.id != id);
    }

    /// Dismiss the newest toast, if any.
    pub fn dismiss_newest(&mut self) {
        self.active.pop();
    }

    /// Drop every toast whose expiry has passed.
    pub fn tick(&mut self, now: Instant) {
        self.active
            .retain(|t| t.expires_at.is_none_or(|at| now < at));
    }

    /// Number of queued toasts (visible or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Ids of the toasts that would render, newest first.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<ToastId> {
        self.active
            .iter()
            .rev()
            .take(self.max_visible)
            .map(|t| t.id)
            .collect()
    }
}

impl Widget for ToastStack {
    /// Render visible toasts top-down, newest first, one row each plus
    /// a blank separator, right-aligned in `area`.
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let mut y = area.y;
        for entry in self.active.iter().rev().take(self.max_visible) {
            if y >= area.bottom() {
                break;
            }
            let accent = Style::new().fg(entry.toast.severity.accent());
            let text = Style::new().fg(PackedRgba::rgb(200, 200, 210));
            let body = match &entry.toast.title {
                Some(title) => format!(
                    "{} {}: {}",
                    entry.toast.severity.glyph(),
                    title,
                    entry.toast.message
                ),
                None => format!("{} {}", entry.toast.severity.glyph(), entry.toast.message),
            };
            let width = (UnicodeWidthStr::width(body.as_str()) as u16 + 2).min(area.width);
            let x = area.right().saturating_sub(width);
            let row = Rect::new(x, y, width, 1);
            let bg = Style::new().bg(PackedRgba::rgb(40, 40, 52));
            fill_area(frame, row, bg);
            let glyph = entry.toast.severity.glyph().to_string();
            let gx = draw_text_span(frame, x + 1, y, &glyph, accent.patch(bg), row.right());
            draw_text_span(frame, gx, y, &body[glyph.len()..], text.patch(bg), row.right());
            y = y.saturating_add(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let mut stack = ToastStack::new();
        let now = t0();
        let a = stack.push(Toast::new("a"), now);
        let b = stack.push(Toast::new("b"), now);
        assert_ne!(a, b);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn tick_expires_by_duration() {
        let mut stack = ToastStack::new();
        let now = t0();
        stack.push(Toast::new("short").duration(Duration::from_millis(100)), now);
        stack.push(Toast::new("long").duration(Duration::from_secs(60)), now);

        stack.tick(now + Duration::from_millis(50));
        assert_eq!(stack.len(), 2);
        stack.tick(now + Duration::from_millis(150));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn persistent_toast_survives_ticks() {
        let mut stack = ToastStack::new();
        let now = t0();
        let id = stack.push(Toast::new("pinned").persistent(), now);
        stack.tick(now + Duration::from_secs(3600));
        assert_eq!(stack.len(), 1);
        stack.dismiss(id);
        assert!(stack.is_empty());
    }

    #[test]
    fn visible_ids_newest_first_capped() {
        let mut stack = ToastStack::new().with_max_visible(2);
        let now = t0();
        let a = stack.push(Toast::new("a"), now);
        let b = stack.push(Toast::new("b"), now);
        let c = stack.push(Toast::new("c"), now);
        assert_eq!(stack.visible_ids(), vec![c, b]);
        let _ = a;
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut stack = ToastStack::new();
        stack.push(Toast::new("a"), t0());
        stack.dismiss(ToastId(999));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn renders_right_aligned_rows() {
        let mut stack = ToastStack::new();
        stack.push(Toast::new("saved").severity(ToastSeverity::Success), t0());
        let mut frame = Frame::new(20, 3);
        stack.render(Rect::new(0, 0, 20, 3), &mut frame);
        let row = frame.buffer.row_text(0);
        assert!(row.trim_start().starts_with('✓'));
        assert!(row.contains("saved"));
        // Right aligned: last content column is near the right edge.
        assert!(row.ends_with(' ') || !row.trim_end().is_empty());
    }
}
