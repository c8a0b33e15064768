use quant_template::utils::namespace::Package;

pub(super) fn run_info(package: &Package, json: bool) -> Result<(), String> {
    if json {
        let rendered = serde_json::to_string(package)
            .map_err(|err| format!("failed to serialize package: {err}"))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("quant-template {} by {}", package.version(), package.author());
    for namespace in package.namespaces() {
        println!("  {:<12}{}", namespace.name(), namespace.summary());
    }
    Ok(())
}
