//! Membership validity evaluation
//!
//! Whether a membership has lapsed is a domain fact independent of
//! credential validity: a bearer with a perfectly valid token may hold
//! an expired membership, and vice versa. The flag is derived at read
//! time and never stored, since "today" advances continuously.

use chrono::{NaiveDate, Utc};

/// A membership is current through the end of its expiration date:
/// one expiring today is still valid today.
pub fn is_current(expires_on: NaiveDate, today: NaiveDate) -> bool {
    expires_on >= today
}

/// Evaluate against the current date
pub fn is_current_now(expires_on: NaiveDate) -> bool {
    is_current(expires_on, Utc::now().date_naive())
}
