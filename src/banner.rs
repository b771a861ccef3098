// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                _       __ _
  ___ ___   __| | ___ / _(_)_  __
 / __/ _ \ / _` |/ _ \ |_| \ \/ /
| (_| (_) | (_| |  __/  _| |>  <
 \___\___/ \__,_|\___|_| |_/_/\_\

    Run code. Read the error. Get the fix.
"#;
    println!("{}", banner);
}
