use onprop::{Declaration, Properties};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=onprop=trace shows every spelling tried
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let props = Properties::parse(
        "# application properties\n\
         spring.datasource.url=jdbc:postgresql://localhost/app\n\
         spring.datasource.userName=app\n\
         feature.newCheckout=off\n",
    )
    .expect("failed to parse properties");

    let rules = [
        Declaration::new()
            .label("dataSource")
            .prefix("spring.datasource")
            .names(["url", "user-name", "password"]),
        Declaration::new()
            .label("newCheckout")
            .prefix("feature")
            .name("new-checkout")
            .having_value("on"),
        Declaration::new()
            .label("legacyCheckout")
            .prefix("feature")
            .name("new-checkout")
            .having_value("off"),
    ];

    for decl in rules {
        match decl.validate() {
            Ok(rule) => println!("{}", rule.evaluate(&props)),
            Err(err) => eprintln!("invalid condition: {err}"),
        }
    }
}
