use quant_template::list_exports;
use serde_json::json;

pub(super) fn run_exports(json: bool) -> Result<(), String> {
    if json {
        println!("{}", json!({ "exports": list_exports() }));
        return Ok(());
    }

    for name in list_exports() {
        println!("{name}");
    }
    Ok(())
}
