mod common;
use common::{date, entry};
use hourlog::core::calculator::week::bucketize;
use hourlog::core::report::{ReportOptions, compose_basic, compose_weekly};
use hourlog::export::wrap_html;
use hourlog::models::week::WeekStart;
use hourlog::utils::formatting::center;
use hourlog::utils::table::{INNER_WIDTH, WeekTable};

fn sunday_first() -> ReportOptions {
    ReportOptions::default()
}

fn monday_first() -> ReportOptions {
    ReportOptions {
        week_start: WeekStart::Monday,
        ..ReportOptions::default()
    }
}

#[test]
fn test_two_week_report_layout() {
    let entries = vec![entry(2, 30, "01/15/2022"), entry(1, 0, "01/17/2022")];

    let expected = concat!(
        "┌──────────────────────────────────────────────────────────────────────────────────────────┐\n",
        "│                                 01/09/2022 - 01/15/2022                                  │\n",
        "│                            Week's Total: 2 hr 30 m (2.50 hr)                             │\n",
        "├────────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┤\n",
        "│   01/09    │   01/10    │   01/11    │   01/12    │   01/13    │   01/14    │   01/15    │\n",
        "├────────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤\n",
        "│     -      │     -      │     -      │     -      │     -      │     -      │  2 hr 30 m │\n",
        "└────────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘\n",
        "┌──────────────────────────────────────────────────────────────────────────────────────────┐\n",
        "│                                 01/16/2022 - 01/22/2022                                  │\n",
        "│                             Week's Total: 1 hr 0 m (1.00 hr)                             │\n",
        "├────────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┤\n",
        "│   01/16    │   01/17    │   01/18    │   01/19    │   01/20    │   01/21    │   01/22    │\n",
        "├────────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤\n",
        "│     -      │  1 hr  0 m │     -      │     -      │     -      │     -      │     -      │\n",
        "└────────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘\n",
        "Total: 3 hr 30 m (3.50 hr)\n",
    );

    assert_eq!(compose_weekly(&entries, &sunday_first()), expected);
}

#[test]
fn test_two_week_report_monday_first() {
    let entries = vec![entry(2, 30, "01/15/2022"), entry(1, 0, "01/17/2022")];

    let expected = concat!(
        "┌──────────────────────────────────────────────────────────────────────────────────────────┐\n",
        "│                                 01/10/2022 - 01/16/2022                                  │\n",
        "│                            Week's Total: 2 hr 30 m (2.50 hr)                             │\n",
        "├────────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┤\n",
        "│   01/10    │   01/11    │   01/12    │   01/13    │   01/14    │   01/15    │   01/16    │\n",
        "├────────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤\n",
        "│     -      │     -      │     -      │     -      │     -      │  2 hr 30 m │     -      │\n",
        "└────────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘\n",
        "┌──────────────────────────────────────────────────────────────────────────────────────────┐\n",
        "│                                 01/17/2022 - 01/23/2022                                  │\n",
        "│                             Week's Total: 1 hr 0 m (1.00 hr)                             │\n",
        "├────────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┤\n",
        "│   01/17    │   01/18    │   01/19    │   01/20    │   01/21    │   01/22    │   01/23    │\n",
        "├────────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤\n",
        "│  1 hr  0 m │     -      │     -      │     -      │     -      │     -      │     -      │\n",
        "└────────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘\n",
        "Total: 3 hr 30 m (3.50 hr)\n",
    );

    assert_eq!(compose_weekly(&entries, &monday_first()), expected);
}

#[test]
fn test_same_day_entries_render_stacked_rows() {
    let entries = vec![
        entry(2, 30, "01/11/2022"),
        entry(1, 5, "01/11/2022"),
        entry(0, 45, "01/13/2022"),
    ];

    let expected = concat!(
        "┌──────────────────────────────────────────────────────────────────────────────────────────┐\n",
        "│                                 01/09/2022 - 01/15/2022                                  │\n",
        "│                            Week's Total: 4 hr 20 m (4.33 hr)                             │\n",
        "├────────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┤\n",
        "│   01/09    │   01/10    │   01/11    │   01/12    │   01/13    │   01/14    │   01/15    │\n",
        "├────────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤\n",
        "│     -      │     -      │  2 hr 30 m │     -      │  0 hr 45 m │     -      │     -      │\n",
        "│     -      │     -      │  1 hr  5 m │     -      │     -      │     -      │     -      │\n",
        "└────────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘\n",
        "Total: 4 hr 20 m (4.33 hr)\n",
    );

    assert_eq!(compose_weekly(&entries, &sunday_first()), expected);
}

#[test]
fn test_empty_report_is_only_the_grand_total() {
    assert_eq!(
        compose_weekly(&[], &sunday_first()),
        "Total: 0 hr 0 m (0.00 hr)\n"
    );
}

#[test]
fn test_every_table_line_has_the_same_width() {
    let entries = vec![
        entry(12, 5, "03/01/2022"),
        entry(0, 0, "03/01/2022"),
        entry(7, 59, "03/05/2022"),
    ];
    let buckets = bucketize(&entries, WeekStart::Sunday);
    let text = WeekTable::new(&buckets[0], "%m/%d/%Y", "%m/%d").render();

    for line in text.lines() {
        assert_eq!(line.chars().count(), INNER_WIDTH + 2, "bad line: {line:?}");
    }
    // header + subtotal + day labels + 3 rules + 2 rows + bottom rule
    assert_eq!(text.lines().count(), 9);
}

#[test]
fn test_week_table_uses_configured_date_formats() {
    let entries = vec![entry(1, 0, "01/17/2022")];
    let buckets = bucketize(&entries, WeekStart::Sunday);
    let text = WeekTable::new(&buckets[0], "%Y-%m-%d", "%a %d").render();

    assert!(text.contains(&center("2022-01-16 - 2022-01-22", INNER_WIDTH)));
    assert!(text.contains(&format!("│{}│", center("Sun 16", 12))));
    assert!(text.contains(&center("Sat 22", 12)));
}

#[test]
fn test_grand_total_equals_sum_of_weekly_subtotals() {
    let entries = vec![
        entry(1, 40, "01/02/2022"),
        entry(2, 50, "01/08/2022"),
        entry(3, 35, "01/09/2022"),
        entry(0, 55, "02/14/2022"),
    ];

    let weekly: i64 = bucketize(&entries, WeekStart::Sunday)
        .iter()
        .map(|b| b.total_minutes)
        .sum();
    assert_eq!(weekly, 540);

    let report = compose_weekly(&entries, &sunday_first());
    assert!(report.ends_with("Total: 9 hr 0 m (9.00 hr)\n"));
    assert_eq!(report.matches("Week's Total:").count(), 3);
}

#[test]
fn test_basic_listing_separates_dates() {
    let entries = vec![
        entry(2, 30, "01/15/2022"),
        entry(1, 15, "01/15/2022"),
        entry(1, 0, "01/17/2022"),
    ];

    let expected = concat!(
        "1.   2  hours 30 minutes on 01/15/2022\n",
        "2.   1  hours 15 minutes on 01/15/2022\n",
        "\n",
        "3.   1  hours  0 minutes on 01/17/2022\n",
        "\n",
        "Total: 4 hours 45 minutes (4.75 hours)\n",
    );

    assert_eq!(compose_basic(&entries, &sunday_first()), expected);
}

#[test]
fn test_basic_listing_groups_by_displayed_date() {
    let entries = vec![
        entry(2, 30, "01/15/2022"),
        entry(1, 0, "01/17/2022"),
        entry(0, 45, "02/01/2022"),
    ];
    let opts = ReportOptions {
        full_date_format: "%m/%Y".to_string(),
        ..ReportOptions::default()
    };

    let expected = concat!(
        "1.   2  hours 30 minutes on 01/2022\n",
        "2.   1  hours  0 minutes on 01/2022\n",
        "\n",
        "3.   0  hours 45 minutes on 02/2022\n",
        "\n",
        "Total: 4 hours 15 minutes (4.25 hours)\n",
    );

    assert_eq!(compose_basic(&entries, &opts), expected);
}

#[test]
fn test_basic_listing_empty() {
    assert_eq!(
        compose_basic(&[], &sunday_first()),
        "\nTotal: 0 hours 0 minutes (0.00 hours)\n"
    );
}

#[test]
fn test_html_wraps_report_in_pre_block() {
    let body = compose_weekly(&[entry(1, 0, "01/17/2022")], &sunday_first());
    let html = wrap_html("Your Output", &body);

    assert!(html.starts_with("\n<!DOCTYPE html>\n<html>\n<head>\n"));
    assert!(html.contains("    <title>Your Output</title>\n"));
    assert!(html.contains("font-family: \"Cascadia Mono\", \"Courier New\", monospace;"));
    assert!(html.contains(&format!("    <pre>\n{body}\n    </pre>\n")));
    assert!(html.ends_with("</body>\n</html>\n"));
}

#[test]
fn test_html_title_is_escaped_body_is_not() {
    let html = wrap_html("Hours <Q1> & \"more\"", "a < b & c");

    assert!(html.contains("    <title>Hours &lt;Q1&gt; &amp; &quot;more&quot;</title>\n"));
    assert!(html.contains("    <pre>\na < b & c\n    </pre>\n"));
}

#[test]
fn test_day_labels_follow_week_start() {
    let key = bucketize(&[entry(1, 0, "01/12/2022")], WeekStart::Monday)[0].key;
    assert_eq!(key.day(0), date(1, 10, 2022));
    assert_eq!(key.day(6), date(1, 16, 2022));
}
