use crate::output::print_json;
use anyhow::Context;
use venture_core::recommend::recommend;
use venture_core::types::Profile;

pub fn run(profile: &str, json: bool) -> anyhow::Result<()> {
    let profile: Profile = profile
        .parse()
        .with_context(|| format!("cannot recommend for profile '{profile}'"))?;
    let lines = recommend(profile);

    if json {
        return print_json(&serde_json::json!({
            "profile": profile,
            "recommendations": lines,
        }));
    }

    println!("Personalized Recommendations ({}):", profile.display_name());
    for line in lines {
        println!("  {line}");
    }
    Ok(())
}
