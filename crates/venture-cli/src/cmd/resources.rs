use crate::output::print_json;

const RESOURCES: [(&str, &str); 3] = [
    ("Small Business Administration", "https://www.sba.gov/"),
    ("SCORE - Business Mentoring", "https://www.score.org/"),
    ("Inc. Magazine - Starting a Business", "https://www.inc.com/"),
];

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<_> = RESOURCES
            .iter()
            .map(|(title, url)| serde_json::json!({ "title": title, "url": url }))
            .collect();
        return print_json(&items);
    }

    println!("Additional Resources:");
    for (title, url) in RESOURCES {
        println!("  - {title}: {url}");
    }
    Ok(())
}
