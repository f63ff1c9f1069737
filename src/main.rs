use verto_rs::{
    CacheApi, ExchangeConfig, FeeCalculator, OrderBookSource, OrderEstimator, OrderFilter,
    SwapRequest,
};

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {} book [token | token_a token_b]", bin);
    eprintln!("  {} estimate <from> <to> <amount> [price]", bin);
    eprintln!("  {} fee <amount>", bin);
    eprintln!();
    eprintln!("  book      → print the active order book (optionally filtered)");
    eprintln!("  estimate  → predict the outcome of a swap without submitting it");
    eprintln!("  fee       → print the exchange fee owed on an amount");
    eprintln!();
    eprintln!("  Token arguments are 43-character ledger addresses.");
    eprintln!("  Set VERTO_CACHE_URL to point at a different cache deployment.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut config = ExchangeConfig::default();
    if let Ok(url) = std::env::var("VERTO_CACHE_URL") {
        config.cache_url = url;
    }

    match args[1].as_str() {
        "book" => {
            let filter = match &args[2..] {
                [] => OrderFilter::All,
                [token] => OrderFilter::Token(token.clone()),
                [a, b] => OrderFilter::Pair(a.clone(), b.clone()),
                _ => {
                    print_usage(&args[0]);
                    std::process::exit(1);
                }
            };
            let api = CacheApi::new(&config);
            eprintln!("Fetching order book...");
            let orders = api.order_book(&filter).await?;
            eprintln!("Found {} active order(s).", orders.len());
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
        "estimate" => {
            if args.len() < 5 || args.len() > 6 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            let request = SwapRequest {
                from: args[2].clone(),
                to: args[3].clone(),
                amount: args[4].parse()?,
                price: match args.get(5) {
                    Some(p) => Some(p.parse()?),
                    None => None,
                },
            };
            let estimator = OrderEstimator::new(CacheApi::new(&config));
            let estimate = estimator.estimate_swap(&request).await?;
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
        "fee" => {
            if args.len() != 3 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            let amount: f64 = args[2].parse()?;
            let calculator = FeeCalculator::new(config.clone());
            println!(
                "fee: {} → {}",
                calculator.fee_amount(amount),
                config.exchange_wallet
            );
        }
        other => {
            eprintln!("Unknown command: '{}'", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}
