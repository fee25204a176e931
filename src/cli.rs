//! Command line arguments for the zcalc shell.

use std::path::PathBuf;

use clap::Parser;

use zcalc::calculator::{
    ArithmeticOp, CalcResult, Operator, perform_operation, perform_scientific_operation,
};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "Arithmetic and scientific calculator")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Operator: + - * / or sin cos tan log
    #[arg(required_unless_present = "list_operators")]
    pub operator: Option<Operator>,

    /// First operand
    pub first: Option<String>,

    /// Second operand
    pub second: Option<String>,

    /// Arithmetic operator applied to both operands before a scientific function
    #[arg(long = "with", value_name = "ARITH")]
    pub arith: Option<ArithmeticOp>,

    /// Copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Config file (default: <config_dir>/zcalc/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the arithmetic operators usable with --with and exit
    #[arg(long)]
    pub list_operators: bool,
}

impl Cli {
    /// Run the selected operator over the given operands.
    pub fn evaluate(&self, operator: Operator) -> CalcResult {
        let first = self.first.as_deref();
        let second = self.second.as_deref();

        match operator {
            Operator::Arithmetic(op) => {
                perform_operation(op, first.unwrap_or_default(), second.unwrap_or_default())
            }
            Operator::Scientific(op) => perform_scientific_operation(op, first, second, self.arith),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcalc::calculator::{Number, ScientificOp};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_arithmetic_args() {
        let cli = parse(&["+", "3", "2"]);
        assert_eq!(cli.operator, Some(Operator::Arithmetic(ArithmeticOp::Add)));
        let result = cli.evaluate(Operator::Arithmetic(ArithmeticOp::Add));
        assert_eq!(result.message(), "Operation Performed: 3+2=5");
    }

    #[test]
    fn test_negative_operand() {
        let cli = parse(&["-", "-3", "2"]);
        assert_eq!(cli.first.as_deref(), Some("-3"));
        assert_eq!(
            cli.evaluate(Operator::Arithmetic(ArithmeticOp::Subtract)).value(),
            Some(Number::Float(-5.0))
        );
    }

    #[test]
    fn test_scientific_with_pre_step() {
        let cli = parse(&["sin", "3", "2", "--with", "+"]);
        assert_eq!(cli.arith, Some(ArithmeticOp::Add));
        let result = cli.evaluate(Operator::Scientific(ScientificOp::Sin));
        assert!(result.message().starts_with("Operation Performed: sin3+2="));
    }

    #[test]
    fn test_missing_operand() {
        let cli = parse(&["*", "3"]);
        let result = cli.evaluate(Operator::Arithmetic(ArithmeticOp::Multiply));
        assert_eq!(result.message(), "Please provide valid input.");
    }

    #[test]
    fn test_unknown_operator_rejected() {
        assert!(Cli::try_parse_from(["zcalc", "%", "3", "2"]).is_err());
    }

    #[test]
    fn test_operator_required() {
        assert!(Cli::try_parse_from(["zcalc"]).is_err());
        assert!(Cli::try_parse_from(["zcalc", "--copy"]).is_err());
    }

    #[test]
    fn test_list_operators_needs_no_operator() {
        let cli = parse(&["--list-operators"]);
        assert!(cli.list_operators);
        assert_eq!(cli.operator, None);
    }
}
