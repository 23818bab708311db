use std::env;

fn main() {
    // Display and polling defaults, overridable at build time.
    // Runtime values always fall back to these when parsing fails.

    // Fixed UTC offset applied to displayed timestamps (seconds)
    if let Ok(offset) = env::var("PLANT_UTC_OFFSET") {
        println!("cargo:rustc-env=PLANT_UTC_OFFSET={}", offset);
        println!("cargo:warning=Using PLANT_UTC_OFFSET from environment: {}", offset);
    } else {
        println!("cargo:rustc-env=PLANT_UTC_OFFSET=3600");
    }

    // Watering check period (seconds)
    if let Ok(period) = env::var("PLANT_CHECK_PERIOD") {
        println!("cargo:rustc-env=PLANT_CHECK_PERIOD={}", period);
        println!(
            "cargo:warning=Using PLANT_CHECK_PERIOD from environment: {}",
            period
        );
    } else {
        println!("cargo:rustc-env=PLANT_CHECK_PERIOD=10");
    }

    // Display language ("en" or "nl")
    if let Ok(locale) = env::var("PLANT_LOCALE") {
        println!("cargo:rustc-env=PLANT_LOCALE={}", locale);
        println!("cargo:warning=Using PLANT_LOCALE from environment: {}", locale);
    } else {
        println!("cargo:rustc-env=PLANT_LOCALE=en");
    }

    // Interval rendering ("duration" or "calendar")
    if let Ok(style) = env::var("PLANT_INTERVAL_STYLE") {
        println!("cargo:rustc-env=PLANT_INTERVAL_STYLE={}", style);
        println!(
            "cargo:warning=Using PLANT_INTERVAL_STYLE from environment: {}",
            style
        );
    } else {
        println!("cargo:rustc-env=PLANT_INTERVAL_STYLE=duration");
    }

    println!("cargo:rerun-if-env-changed=PLANT_UTC_OFFSET");
    println!("cargo:rerun-if-env-changed=PLANT_CHECK_PERIOD");
    println!("cargo:rerun-if-env-changed=PLANT_LOCALE");
    println!("cargo:rerun-if-env-changed=PLANT_INTERVAL_STYLE");
}
