use anyhow::{Context, Result};
use eyemotion_pricing::{
    fingerprint, BillingCycle, Currency, PriceCalculator, PriceCatalog, PriceResult, Selection,
};
use std::path::Path;
use tracing::info;

/// Built-in tables, or a validated catalog file
pub fn load_catalog(path: Option<&Path>) -> Result<PriceCatalog> {
    let Some(path) = path else {
        return Ok(PriceCatalog::default());
    };

    info!(path = %path.display(), "loading catalog");
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;

    // Each validation failure is already logged by the validator
    PriceCatalog::from_json(&json)
        .with_context(|| format!("failed to load catalog {}", path.display()))
}

pub struct QuoteArgs {
    pub plan: String,
    pub region: String,
    pub program: String,
    pub currency: String,
    pub billing: String,
    pub team_size: u32,
    pub add_ons: Vec<String>,
    pub bundle: Option<String>,
}

/// Turn command-line arguments into a selection
///
/// A `--bundle` replaces any `--add-on` flags.
pub fn build_selection(args: QuoteArgs) -> Result<Selection> {
    let currency: Currency = args.currency.parse()?;
    let billing: BillingCycle = args.billing.parse()?;

    let mut selection = Selection::new(args.plan, args.region, args.program, currency)
        .with_billing_cycle(billing)
        .with_team_size(args.team_size);
    for add_on in &args.add_ons {
        selection.toggle_add_on(add_on);
    }
    if let Some(bundle) = &args.bundle {
        selection.select_bundle(bundle);
    }
    Ok(selection)
}

/// Price the arguments against a catalog
pub fn price(catalog: PriceCatalog, args: QuoteArgs) -> Result<PriceResult> {
    let selection = build_selection(args)?;
    let calculator = PriceCalculator::new(catalog)?;
    Ok(calculator.compute(&selection)?)
}

/// Execute the quote command
pub fn quote(catalog: PriceCatalog, args: QuoteArgs) -> Result<()> {
    let result = price(catalog, args)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Execute the catalog show command
pub fn show(catalog: &PriceCatalog) -> Result<()> {
    println!("{}", catalog.to_json_pretty()?);
    Ok(())
}

/// Execute the catalog validate command
///
/// Loading already validated the catalog; this prints a summary.
pub fn validate(catalog: &PriceCatalog) -> Result<()> {
    println!("Catalog is valid");
    println!("  Plans: {}", catalog.plans.len());
    println!("  Regions: {}", catalog.regions.len());
    println!("  Social programs: {}", catalog.social_programs.len());
    println!("  Add-ons: {}", catalog.add_ons.len());
    println!("  Bundles: {}", catalog.bundles.len());
    Ok(())
}

/// Execute the catalog fingerprint command
pub fn print_fingerprint(catalog: &PriceCatalog) -> Result<()> {
    println!("{}", fingerprint(catalog)?);
    Ok(())
}
