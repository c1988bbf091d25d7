use clap::Args;
use has_one_product::prelude::{CartLine, CartTotals, ProductId, RuleSpecification};

#[derive(Debug, Args)]
pub(crate) struct EvaluateArgs {
    /// Product list, e.g. "77, 123:2, 156:3-8"
    #[arg(long)]
    spec: String,

    /// Cart line as <product>:<quantity>; repeat for more lines
    #[arg(long = "line", value_parser = parse_line)]
    lines: Vec<CartLine>,
}

pub(crate) fn run(args: &EvaluateArgs) -> Result<(), String> {
    let specification = RuleSpecification::parse(&args.spec);

    for warning in specification.warnings() {
        eprintln!("warning: {warning}");
    }

    let totals: CartTotals = args.lines.iter().copied().collect();

    if specification.matches(&totals) {
        println!("match");
    } else {
        println!("no match");
    }

    Ok(())
}

fn parse_line(text: &str) -> Result<CartLine, String> {
    let (product, quantity) = text
        .split_once(':')
        .ok_or_else(|| format!("expected <product>:<quantity>, got {text:?}"))?;

    let product: ProductId = product
        .parse()
        .map_err(|error| format!("invalid product id {product:?}: {error}"))?;

    let quantity: i64 = quantity
        .trim()
        .parse()
        .map_err(|error| format!("invalid quantity {quantity:?}: {error}"))?;

    if quantity <= 0 {
        return Err(format!("quantity must be positive, got {quantity}"));
    }

    Ok(CartLine::new(product, quantity))
}
