//! Implementation of the `katalog show` command.

use tracing::instrument;

use katalog_core::{application::CatalogService, domain::ProductId};

use crate::{
    cli::{OutputFormat, ShowArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(product_id = %args.id))]
pub fn execute(
    args: ShowArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // An id that could never have been generated cannot be stored either.
    let not_found = || CliError::ProductNotFound {
        id: args.id.clone(),
    };
    let id = ProductId::new(args.id.as_str()).map_err(|_| not_found())?;

    let service = CatalogService::new(super::product_store(&global, &config));
    let detail = service.find(&id).ok_or_else(not_found)?;

    if output.format() == OutputFormat::Json {
        output.json(&detail)?;
        return Ok(());
    }

    let product = &detail.product;
    output.header(product.product_name())?;
    output.data(&format!("  Id:        {}", product.product_id()))?;
    output.data(&format!("  Seller:    {}", product.seller_info()))?;
    output.data(&format!("  Category:  {}", product.category()))?;
    output.data(&format!("  Stock:     {}", product.stock_quantity()))?;
    output.data(&format!("  Price:     {}", output.pricing_line(&detail.pricing)))?;

    if detail.images.is_empty() {
        output.data(&format!("  Images:    {}", super::list::PLACEHOLDER_IMAGE))?;
    } else {
        output.data("  Images:")?;
        for url in &detail.images {
            output.data(&format!("    {url}"))?;
        }
    }

    Ok(())
}
