//! Implementation of the `katalog list` command.

use tracing::instrument;

use katalog_core::application::{CatalogService, ProductCard};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Shown in place of a product's first image when it has none.
pub const PLACEHOLDER_IMAGE: &str = "(no image)";

#[instrument(skip_all)]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = CatalogService::new(super::product_store(&global, &config));
    let cards = service.list();

    // `--output-format json` wins over the table default.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if cards.is_empty() {
                output.info("No products yet. Add one with 'katalog add'.")?;
                return Ok(());
            }
            output.header(&format!("Products ({}):", cards.len()))?;
            for card in &cards {
                output.data("")?;
                output.data(&format!("  {}  {}", card.product_name, card.product_id))?;
                output.data(&format!("    {}", image_or_placeholder(card)))?;
                output.data(&format!("    {}", output.pricing_line(&card.pricing)))?;
            }
        }
        ListFormat::Json => {
            // Parseable even in non-TTY pipes, so no header or colour.
            output.json(&cards)?;
        }
        ListFormat::List => {
            for card in &cards {
                output.data(&format!("{}\t{}", card.product_id, card.product_name))?;
            }
        }
        ListFormat::Csv => {
            output.data("product_id,product_name,image,sale_price,original_price,discount_percentage")?;
            for card in &cards {
                output.data(&csv_row(card))?;
            }
        }
    }

    Ok(())
}

fn image_or_placeholder(card: &ProductCard) -> &str {
    card.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
}

fn csv_row(card: &ProductCard) -> String {
    let pricing = &card.pricing;
    format!(
        "{},{},{},{:.2},{:.2},{}",
        card.product_id,
        csv_field(&card.product_name),
        csv_field(card.image.as_deref().unwrap_or("")),
        pricing.display_price(),
        pricing.original_price,
        pricing.discount_percentage,
    )
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
