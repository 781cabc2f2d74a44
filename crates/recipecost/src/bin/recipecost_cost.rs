//! recipecost-cost - Cost recipes from a JSON file.

fn main() -> std::process::ExitCode {
    recipecost::cmd::cost_cmd::main()
}
