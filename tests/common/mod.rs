use job_log::input::toml_input::MonthFile;
use job_log::input::{Config, Settings};

#[must_use]
#[allow(dead_code)]
pub fn settings_json(name: &str, iban: &str) -> Settings {
    serde_json::from_str(&format!(
        concat!(
            "{{",
            "\"name\": \"{}\",",
            "\"iban\": \"{}\",",
            "\"decorated_template\": true",
            "}}",
        ),
        name, iban
    ))
    .expect("settings json should deserialize")
}

#[must_use]
#[allow(dead_code)]
pub fn month_file(toml: &str) -> MonthFile {
    toml::from_str(toml).expect("month toml should deserialize")
}

#[must_use]
#[allow(dead_code)]
pub fn config_from(toml: &str, name: &str, iban: &str) -> Config {
    Config::from_parts(month_file(toml), settings_json(name, iban))
        .build()
        .expect("config should build")
}
