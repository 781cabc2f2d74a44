//! recipecost-menu - Classify menu items by popularity and profitability.

fn main() -> std::process::ExitCode {
    recipecost::cmd::menu_cmd::main()
}
