//! Static explanation content, one table per locale.

mod en;
mod es;

use crate::model::explanation::{ExplanationRecord, PatternKey};
use crate::model::locale::Locale;

/// Looks up the record for `key` in the `locale` table. `PatternKey::NoPattern`
/// has no static record and yields `None`.
pub fn record(locale: Locale, key: PatternKey) -> Option<&'static ExplanationRecord> {
    match locale {
        Locale::En => en::lookup(key),
        Locale::Es => es::lookup(key),
    }
}
