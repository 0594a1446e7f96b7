use dns_survey_domain::SurveyRow;
use std::fmt::Write;

const COL_SERVER: usize = 20;
const COL_NAME: usize = 60;
const COL_CITY: usize = 20;
const COL_DNSSEC: usize = 12;
const COL_RELIABILITY: usize = 15;

/// Render survey rows as a fixed-width table.
///
/// Pure: row order is preserved, no row is dropped, and the detail toggle
/// only selects which columns appear. Rows always carry every field.
pub fn render_table(rows: &[SurveyRow], detail: bool) -> String {
    let mut out = String::new();

    write_cell(&mut out, "DNS server", COL_SERVER);
    write_cell(&mut out, "Name", COL_NAME);
    write_cell(&mut out, "City", COL_CITY);
    if detail {
        write_cell(&mut out, "DNSSEC", COL_DNSSEC);
        write_cell(&mut out, "Reliability", COL_RELIABILITY);
    }
    out.push_str("Resolved\n");

    write_cell(&mut out, &"-".repeat("DNS server".len()), COL_SERVER);
    write_cell(&mut out, &"-".repeat("Name".len()), COL_NAME);
    write_cell(&mut out, &"-".repeat("City".len()), COL_CITY);
    if detail {
        write_cell(&mut out, &"-".repeat("DNSSEC".len()), COL_DNSSEC);
        write_cell(&mut out, &"-".repeat("Reliability".len()), COL_RELIABILITY);
    }
    out.push_str(&"-".repeat("Resolved".len()));
    out.push('\n');

    for row in rows {
        let resolved = row
            .addresses
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        write_cell(&mut out, &row.server.ip, COL_SERVER);
        write_cell(&mut out, &row.server.name, COL_NAME);
        write_cell(&mut out, &row.server.city, COL_CITY);
        if detail {
            write_cell(&mut out, &row.server.dnssec.to_string(), COL_DNSSEC);
            write_cell(&mut out, &row.server.reliability.to_string(), COL_RELIABILITY);
        }
        out.push_str(&resolved);
        out.push('\n');
    }

    out
}

fn write_cell(out: &mut String, value: &str, width: usize) {
    // Pad, never truncate; a long name shifts its row instead of losing data
    let _ = write!(out, "{:<width$} ", value, width = width);
}
