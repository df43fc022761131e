use onprop::{Declaration, Properties};

fn main() {
    // Declare the condition
    let rule = Declaration::new()
        .label("cache")
        .prefix("app.cache")
        .name("enabled")
        .having_value("true")
        .match_if_missing(true)
        .validate()
        .expect("invalid property condition");

    println!("{rule}");

    // Evaluate against a few property snapshots
    let snapshots = [
        Properties::new(),
        Properties::new().set("app.cache.enabled", "TRUE"),
        Properties::new().set("app.cache.enabled", "false"),
    ];

    for props in &snapshots {
        let active = if rule.matches(props) { "active" } else { "skipped" };
        println!("{} property(ies) -> {active}", props.len());
    }
}
