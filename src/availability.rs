use std::collections::HashMap;

use crate::models::availability::{AdvisorAvailability, RawAvailability, advisor_id_string};
use crate::models::booking::BookingRecord;

/// Drop every slot already claimed by a ledger record, matching on exact
/// time string and on the advisor id's string form. A day left with no slots
/// disappears from the outer map entirely.
pub fn filter_claimed_slots(raw: &RawAvailability, ledger: &[BookingRecord]) -> RawAvailability {
    raw.iter()
        .map(|(day, slots)| {
            let open: HashMap<_, _> = slots
                .iter()
                .filter(|(time, advisor)| {
                    !ledger.iter().any(|booking| {
                        booking.time == **time
                            && booking.advisor_id == advisor_id_string(*advisor)
                    })
                })
                .map(|(time, advisor)| (time.clone(), advisor.clone()))
                .collect();
            (day.clone(), open)
        })
        .filter(|(_, slots)| !slots.is_empty())
        .collect()
}

/// Reshape filtered availability into per-advisor sorted schedules.
///
/// Times are sorted by plain string comparison: chronological for ISO-8601
/// strings sharing one offset, not a real datetime sort, so mixed offsets
/// would interleave. Advisors are ordered by a parseInt-style read of the id.
/// Both comparators are intentionally fragile; do not upgrade them to
/// semantic ones.
pub fn group_by_advisor(filtered: &RawAvailability) -> Vec<AdvisorAvailability> {
    let mut times_by_advisor: HashMap<String, Vec<String>> = HashMap::new();
    for slots in filtered.values() {
        for (time, advisor) in slots {
            times_by_advisor
                .entry(advisor_id_string(advisor))
                .or_default()
                .push(time.clone());
        }
    }

    let mut grouped: Vec<AdvisorAvailability> = times_by_advisor
        .into_iter()
        .map(|(advisor_id, mut times)| {
            times.sort();
            AdvisorAvailability { advisor_id, times }
        })
        .collect();

    // Ids with no numeric prefix have no defined position and land after all
    // numeric ids.
    grouped.sort_by_key(|entry| {
        let key = int_prefix(&entry.advisor_id);
        (key.is_none(), key)
    });
    grouped
}

/// True iff some (time, advisorId) pair in `availability` string-matches the
/// given slot.
pub fn contains_slot(availability: &RawAvailability, time: &str, advisor_id: &str) -> bool {
    availability
        .values()
        .flat_map(|slots| slots.iter())
        .any(|(slot_time, slot_advisor)| {
            slot_time == time && advisor_id_string(slot_advisor) == advisor_id
        })
}

/// Base-10 prefix parse in the parseInt mold: leading whitespace and sign
/// allowed, digits taken until the first non-digit, `None` when no digits
/// lead.
fn int_prefix(id: &str) -> Option<i64> {
    let s = id.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    prefix.parse::<i64>().ok().map(|n| sign * n)
}
