use crate::output::{bar_chart, print_json, print_table};
use venture_core::engagement;

pub fn run(json: bool) -> anyhow::Result<()> {
    let points = engagement::sample();

    if json {
        return print_json(&points);
    }

    println!("User Engagement Metrics Over Time");
    println!("(illustrative sample data, not measured)\n");

    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                p.index.to_string(),
                p.page_views.to_string(),
                p.time_spent_minutes.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "PAGE VIEWS", "TIME SPENT (MIN)"], rows);

    let views: Vec<(String, u64)> = points
        .iter()
        .map(|p| (p.index.to_string(), u64::from(p.page_views)))
        .collect();
    let minutes: Vec<(String, u64)> = points
        .iter()
        .map(|p| (p.index.to_string(), u64::from(p.time_spent_minutes)))
        .collect();

    println!();
    print!("{}", bar_chart("Page Views", &views, 40));
    println!();
    print!("{}", bar_chart("Time Spent (minutes)", &minutes, 40));
    Ok(())
}
