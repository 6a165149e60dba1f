//! Prints the left Riemann sum for every catalog function.
//!
//! Run with `RUST_LOG=debug` to see why a configuration is in error:
//!
//! ```text
//! cargo run -p riemann-model --example left_sum
//! ```

use riemann_model::{Catalog, ModelConfig, RiemannModel};

const CONFIG: &str = r#"
x_min = -1.0
x_max = 2.0
interval_count = 6
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ModelConfig::from_toml_str(CONFIG)?;
    let mut model: RiemannModel = config.build();

    println!(
        "domain [{}, {}], {} intervals, step {}",
        model.x_min(),
        model.x_max(),
        model.interval_count(),
        model.step_size()
    );
    println!("{:<10} {:>12} {:>12}", "function", "left sum", "exact");

    for function in Catalog::ALL {
        model.set_function(function);

        if model.is_in_error() {
            println!("{:<10} {:>12} {:>12}", function.title(), "error", "-");
            continue;
        }

        let exact = model
            .exact_integral()
            .map_or_else(|| "n/a".to_owned(), |value| format!("{value:.6}"));
        println!(
            "{:<10} {:>12.6} {:>12}",
            function.title(),
            model.rectangle_sum(),
            exact
        );
    }

    Ok(())
}
