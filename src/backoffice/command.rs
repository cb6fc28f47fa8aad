use std::collections::BTreeSet;
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use crate::backoffice::auth;
use crate::backoffice::controller::appetizer::AppetizerSales;
use crate::backoffice::controller::error::ScreenError;
use crate::backoffice::controller::ingredient::IngredientsScreen;
use crate::backoffice::controller::pizza::PizzaSales;
use crate::backoffice::controller::report::REPORTS;
use crate::backoffice::model::config::AppConfig;
use crate::backoffice::model::ingredient::{Ingredient, IngredientEdit};
use crate::backoffice::model::item::MenuItem;
use crate::backoffice::model::notice::Notices;
use crate::backoffice::state::AppState;
use crate::backoffice::util::time::helper;

#[derive(Parser, Debug)]
#[command(name = "backoffice")]
#[command(about = "back office cli used by restaurant staff for sales entry and inventory", version, long_about = None
)]
pub(crate) struct Cli {
    #[arg(long, global = true, help = "Print records as JSON instead of tables.")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// log in and keep the session for later commands
    #[command(arg_required_else_help = true)]
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// forget the stored session
    Logout,
    /// show who is logged in
    Whoami,
    /// appetizer sales
    #[command(arg_required_else_help = true)]
    Appetizer(AppetizerArgs),
    /// pizza sales
    #[command(arg_required_else_help = true)]
    Pizza(PizzaArgs),
    /// ingredient inventory
    #[command(arg_required_else_help = true)]
    Ingredient(IngredientArgs),
    /// list report links
    Reports,
}

#[derive(Debug, Args)]
struct AppetizerArgs {
    #[command(subcommand)]
    command: AppetizerCmds,
}

#[derive(Debug, Subcommand)]
enum AppetizerCmds {
    /// list appetizers with their prices
    Menu,
    #[command(arg_required_else_help = true)]
    Order {
        #[arg(long, help = "Order date, defaults to today.", value_name = "YYYY-MM-DD", value_parser = parse_date)]
        date: Option<String>,
        #[arg(long = "line", help = "Order line as APPETIZER_ID[:QUANTITY].", value_name = "ID:QTY", num_args = 1.., required = true, value_parser = parse_line)]
        lines: Vec<(i64, u32)>,
    },
}

#[derive(Debug, Args)]
struct PizzaArgs {
    #[command(subcommand)]
    command: PizzaCmds,
}

#[derive(Debug, Subcommand)]
enum PizzaCmds {
    /// list sizes and toppings
    Menu,
    #[command(arg_required_else_help = true)]
    Order {
        #[arg(long, help = "Order date, defaults to today.", value_name = "YYYY-MM-DD", value_parser = parse_date)]
        date: Option<String>,
        #[arg(long, help = "Pizza size id.", value_name = "SIZE_ID")]
        size: i64,
        #[arg(long = "topping", help = "Topping id, repeat for more.", value_name = "TOPPING_ID")]
        toppings: Vec<i64>,
    },
}

#[derive(Debug, Args)]
struct IngredientArgs {
    #[command(subcommand)]
    command: IngredientCmds,
}

#[derive(Debug, Subcommand)]
enum IngredientCmds {
    List,
    #[command(arg_required_else_help = true)]
    Show { id: i64 },
    #[command(arg_required_else_help = true)]
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct UpdateArgs {
    id: i64,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    pack_size: Option<i64>,
    #[arg(long)]
    pack_type: Option<String>,
    #[arg(long)]
    small_serving: Option<f64>,
    #[arg(long)]
    large_serving: Option<f64>,
    #[arg(long)]
    king_kold_price: Option<f64>,
    #[arg(long)]
    piqua_pizza_supply: Option<f64>,
    #[arg(long)]
    topping: Option<bool>,
    #[arg(long)]
    appetizer: Option<bool>,
}

impl From<UpdateArgs> for IngredientEdit {
    fn from(args: UpdateArgs) -> Self {
        Self {
            description: args.description,
            pack_size: args.pack_size,
            pack_type: args.pack_type,
            small_serving: args.small_serving,
            large_serving: args.large_serving,
            king_kold_price: args.king_kold_price,
            piqua_pizza_supply: args.piqua_pizza_supply,
            topping: args.topping,
            appetizer: args.appetizer,
        }
    }
}

fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("invalid date {s}: {e}"))
}

fn parse_line(s: &str) -> Result<(i64, u32), String> {
    let (id, quantity) = s.split_once(':').unwrap_or((s, "1"));
    let id = id.trim().parse().map_err(|_| format!("invalid appetizer id in {s}"))?;
    match quantity.trim().parse::<u32>() {
        Ok(q) if q >= 1 => Ok((id, q)),
        _ => Err(format!("quantity in {s} must be a whole number of at least 1")),
    }
}

/// Run one command against the api.
pub(crate) async fn run(config: AppConfig, cli: Cli) -> anyhow::Result<()> {
    let state = AppState::new(&config).context("failed to build api client")?;
    let api = state.api();
    let json = cli.json;

    if let Commands::Login { username, password } = &cli.command {
        let session = auth::login(api, state.store(), username, password).await?;
        println!("logged in as {}", session.display_name());
        return Ok(());
    }
    if let Commands::Logout = cli.command {
        auth::logout(state.store())?;
        println!("logged out");
        return Ok(());
    }

    let session = state.require_session()?;
    match cli.command {
        Commands::Whoami => println!("{}", session.display_name()),
        Commands::Reports => {
            for report in REPORTS {
                println!("{}: {}", report.title, report.url);
            }
        }
        Commands::Appetizer(args) => match args.command {
            AppetizerCmds::Menu => {
                let mut screen = AppetizerSales::load(api).await?;
                print_notices(&mut screen.notices);
                if json {
                    return print_json(&screen.appetizers);
                }
                for a in &screen.appetizers {
                    match screen.prices.get(a.id) {
                        Some(price) => println!("{:>4}  {:<30} ${:.2}", a.id, a.description, price),
                        None => println!("{:>4}  {:<30} -", a.id, a.description),
                    }
                }
            }
            AppetizerCmds::Order { date, lines } => {
                let mut screen = AppetizerSales::load(api).await?;
                if let Some(date) = date {
                    screen.draft.order_date = date;
                }
                fill_appetizer_order(&mut screen, lines)?;
                println!("order total: ${:.2}", screen.total());
                screen.submit(api).await?;
                print_notices(&mut screen.notices);
            }
        },
        Commands::Pizza(args) => match args.command {
            PizzaCmds::Menu => {
                let mut screen = PizzaSales::load(api).await?;
                print_notices(&mut screen.notices);
                if json {
                    return print_json(&serde_json::json!({
                        "sizes": screen.sizes,
                        "toppings": screen.toppings,
                    }));
                }
                print_menu("sizes", &screen.sizes);
                print_menu("toppings", &screen.toppings);
            }
            PizzaCmds::Order { date, size, toppings } => {
                let mut screen = PizzaSales::load(api).await?;
                if let Some(date) = date {
                    screen.draft.order_date = date;
                }
                fill_pizza_order(&mut screen, size, toppings)?;
                screen.submit(api).await?;
                print_notices(&mut screen.notices);
            }
        },
        Commands::Ingredient(args) => {
            let mut screen = IngredientsScreen::load(api).await?;
            match args.command {
                IngredientCmds::List => {
                    if json {
                        return print_json(&screen.ingredients);
                    }
                    print_ingredient_header();
                    screen.ingredients.iter().for_each(print_ingredient);
                }
                IngredientCmds::Show { id } => {
                    let ingredient = screen.detail(api, id).await?;
                    if json {
                        return print_json(&ingredient);
                    }
                    print_ingredient_header();
                    print_ingredient(&ingredient);
                }
                IngredientCmds::Update(args) => {
                    let id = args.id;
                    let ingredient = screen.update(api, id, args.into()).await?;
                    print_notices(&mut screen.notices);
                    print_ingredient_header();
                    print_ingredient(&ingredient);
                }
            }
        }
        Commands::Login { .. } | Commands::Logout => unreachable!("handled before the session check"),
    }
    Ok(())
}

/// One draft line per `(appetizer id, quantity)`. The empty line a draft starts with is
/// dropped afterwards.
fn fill_appetizer_order(screen: &mut AppetizerSales, lines: Vec<(i64, u32)>) -> Result<(), ScreenError> {
    let placeholder = screen.draft.lines()[0].local_id;
    for (appetizer_id, quantity) in lines {
        let local_id = screen.draft.add_line();
        screen.select(local_id, appetizer_id)?;
        screen.draft.set_quantity(local_id, quantity)?;
    }
    screen.draft.remove_line(placeholder)?;
    Ok(())
}

/// Repeated `--topping` ids select the topping once.
fn fill_pizza_order(screen: &mut PizzaSales, size: i64, toppings: Vec<i64>) -> Result<(), ScreenError> {
    screen.select_size(size)?;
    for topping in toppings.into_iter().collect::<BTreeSet<_>>() {
        if !screen.draft.has_topping(topping) {
            screen.toggle_topping(topping)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Show every live notice once, then dismiss it.
fn print_notices(notices: &mut Notices) {
    notices.expire(helper::get_utc_now());
    let shown: Vec<u64> = notices
        .active()
        .iter()
        .map(|notice| {
            println!("[{}] {}", notice.kind, notice.message);
            notice.id
        })
        .collect();
    for id in shown {
        notices.dismiss(id);
    }
}

fn print_menu(title: &str, items: &[MenuItem]) {
    println!("{title}:");
    if items.is_empty() {
        println!("  none available");
    }
    for item in items {
        println!("{:>4}  {}", item.id, item.description);
    }
}

fn print_ingredient_header() {
    println!(
        "{:>4}  {:<20} {:>6} {:<8} {:>7} {:>7} {:>9} {:>9} {:<3} {:<3}",
        "ID", "Description", "Pack", "Type", "Small", "Large", "KingKold", "Piqua", "Top", "App"
    );
}

fn print_ingredient(i: &Ingredient) {
    let mark = |b: bool| if b { "x" } else { "" };
    println!(
        "{:>4}  {:<20} {:>6} {:<8} {:>7} {:>7} {:>9} {:>9} {:<3} {:<3}",
        i.ingredientid,
        i.description,
        i.packsize,
        i.packtype,
        i.smallserving,
        i.largeserving,
        format!("${:.2}", i.kingkoldprice),
        format!("${:.2}", i.piquapizzasupply),
        mark(i.topping),
        mark(i.appetizer)
    );
}
