//! Audit log table component

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use jot_core::AuditLogEntry;

use crate::state::AppState;

/// One display row of the audit table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRow {
    pub id: i64,
    pub note_id: String,
    pub action: String,
    pub username: String,
    pub timestamp: String,
    pub note_content: String,
}

/// Project audit entries into display rows.
///
/// Pure: the same entries always produce the same rows.
#[must_use]
pub fn project_rows(entries: &[AuditLogEntry]) -> Vec<AuditRow> {
    entries
        .iter()
        .map(|entry| AuditRow {
            id: entry.id,
            note_id: entry.note_id.to_string(),
            action: entry.action.clone(),
            username: entry.username.clone(),
            timestamp: format_timestamp(entry.timestamp),
            note_content: entry.note_content.clone(),
        })
        .collect()
}

/// "March 03, 2024, 02:15 PM" style.
fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%B %d, %Y, %I:%M %p").to_string()
}

/// Tabular display of projected audit rows.
#[component]
pub fn AuditLogTable(rows: Vec<AuditRow>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "audit-log-table",
            style: "overflow-x: auto;",

            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",

                thead {
                    tr {
                        for heading in ["Note", "Action", "Username", "Timestamp", "Content"] {
                            th {
                                style: "
                                    text-align: left;
                                    padding: 8px 12px;
                                    border-bottom: 2px solid {colors.border};
                                    color: {colors.text_secondary};
                                ",
                                "{heading}"
                            }
                        }
                    }
                }

                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: 5,
                                style: "padding: 16px; text-align: center; color: {colors.text_muted};",
                                "No audit entries"
                            }
                        }
                    } else {
                        for row in rows {
                            tr {
                                key: "{row.id}",
                                td { style: "padding: 8px 12px; border-bottom: 1px solid {colors.border_light};", "{row.note_id}" }
                                td { style: "padding: 8px 12px; border-bottom: 1px solid {colors.border_light};", "{row.action}" }
                                td { style: "padding: 8px 12px; border-bottom: 1px solid {colors.border_light};", "{row.username}" }
                                td { style: "padding: 8px 12px; border-bottom: 1px solid {colors.border_light}; white-space: nowrap;", "{row.timestamp}" }
                                td { style: "padding: 8px 12px; border-bottom: 1px solid {colors.border_light}; max-width: 320px; overflow: hidden; text-overflow: ellipsis;", "{row.note_content}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jot_core::NoteId;
    use pretty_assertions::assert_eq;

    fn entry_at(hour: u32, minute: u32) -> AuditLogEntry {
        AuditLogEntry {
            id: 5,
            note_id: NoteId::new(9),
            action: "UPDATE".to_string(),
            username: "amara".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 3, hour, minute, 0).unwrap(),
            note_content: "{\"content\":\"old\"}".to_string(),
        }
    }

    #[test]
    fn test_timestamp_formats_with_month_name_and_meridiem() {
        let rows = project_rows(&[entry_at(14, 15)]);
        assert_eq!(rows[0].timestamp, "March 03, 2024, 02:15 PM");

        let rows = project_rows(&[entry_at(9, 5)]);
        assert_eq!(rows[0].timestamp, "March 03, 2024, 09:05 AM");
    }

    #[test]
    fn test_projection_passes_fields_through() {
        let rows = project_rows(&[entry_at(14, 15)]);
        assert_eq!(rows[0].id, 5);
        assert_eq!(rows[0].note_id, "9");
        assert_eq!(rows[0].action, "UPDATE");
        assert_eq!(rows[0].username, "amara");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let entries = [entry_at(14, 15), entry_at(9, 5)];
        assert_eq!(project_rows(&entries), project_rows(&entries));
    }
}
