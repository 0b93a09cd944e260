//! Human-readable rendering and currency formatting.

use crate::item::Item;
use crate::notification::Notification;
use crate::operations::TransitionOutcome;
use crate::reservation::Reservation;
use crate::user::User;

/// Formats a whole-peso amount the Chilean way: `$1.234.567`.
///
/// # Examples
///
/// ```
/// use flota::output::format_clp;
///
/// assert_eq!(format_clp(150_000), "$150.000");
/// assert_eq!(format_clp(50), "$50");
/// ```
#[must_use]
pub fn format_clp(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// A compact one-line (per record) human rendering.
pub trait HumanRender {
    /// Renders the value for terminal display.
    fn render_human(&self) -> String;
}

fn id_or_dash(id: Option<impl std::fmt::Display>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

impl HumanRender for Item {
    fn render_human(&self) -> String {
        let availability = if self.available() { "" } else { " [delisted]" };
        format!(
            "#{} {} ({}, {}) {} {}/day{}",
            id_or_dash(self.id()),
            self.name(),
            self.model(),
            self.year(),
            self.category(),
            format_clp(self.price_per_day()),
            availability,
        )
    }
}

impl HumanRender for Reservation {
    fn render_human(&self) -> String {
        let location = self
            .project_location()
            .map_or_else(String::new, |l| format!(" at {l}"));
        format!(
            "#{} item #{} {} ({} days) {} [{}]{}",
            id_or_dash(self.id()),
            self.item_id(),
            self.range(),
            self.range().days(),
            format_clp(self.total_price()),
            self.status(),
            location,
        )
    }
}

impl HumanRender for Notification {
    fn render_human(&self) -> String {
        let unread = if self.read() { " " } else { "*" };
        format!(
            "#{}{} [{}] {}: {}",
            id_or_dash(self.id()),
            unread,
            self.kind(),
            self.title(),
            self.message(),
        )
    }
}

impl HumanRender for User {
    fn render_human(&self) -> String {
        let role = if self.is_admin() { " [admin]" } else { "" };
        format!(
            "#{} {} <{}>{}",
            id_or_dash(self.id()),
            self.username(),
            self.email(),
            role,
        )
    }
}

impl HumanRender for TransitionOutcome {
    fn render_human(&self) -> String {
        format!(
            "{}\nnotified: {}",
            self.reservation.render_human(),
            self.notification.render_human(),
        )
    }
}

impl<T: HumanRender> HumanRender for Vec<T> {
    fn render_human(&self) -> String {
        if self.is_empty() {
            "(none)".to_string()
        } else {
            self.iter()
                .map(HumanRender::render_human)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
