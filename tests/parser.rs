#[cfg(test)]
mod parser_tests {
    use smart_calculator as calc;

    use calc::calculator::{to_postfix, tokenize};
    use calc::environment::Environment;
    use calc::error::CalculatorError;
    use calc::parser::Parser;
    use calc::token::*;

    fn postfix(source: &str) -> String {
        let mut env = Environment::new();
        env.assign("a", 1.into());
        env.assign("b", 2.into());

        join(&to_postfix(source, &env).unwrap())
    }

    fn postfix_err(source: &str) -> CalculatorError {
        to_postfix(source, &Environment::new()).unwrap_err()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
        assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("10-3-2"), "10 3 - 2 -");
        assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
        assert_eq!(postfix("8/4*2"), "8 4 / 2 *");
    }

    #[test]
    fn test_unary_attaches_to_following_operand() {
        assert_eq!(postfix("-2*3"), "2 - 3 *");
        assert_eq!(postfix("2*-3"), "2 3 - *");
        assert_eq!(postfix("2---2"), "2 2 - - -");
    }

    #[test]
    fn test_unary_before_group_waits_for_the_group() {
        assert_eq!(postfix("-(a+b)*3"), "a b + - 3 *");
    }

    #[test]
    fn test_identifiers_keep_their_names() {
        assert_eq!(postfix("a*(b-a)"), "a b a - *");
    }

    #[test]
    fn test_postfix_has_no_parentheses() {
        let env = Environment::new();
        let tokens = to_postfix("((1+2))*((3))", &env).unwrap();

        assert!(tokens.iter().all(|t| !t.is_paren()));
        assert_eq!(join(&tokens), "1 2 + 3 *");
    }

    #[test]
    fn test_unbalanced_parentheses() {
        for source in ["(1+2", "1+2)", ")(", "((1)", "(1))"] {
            assert!(
                matches!(postfix_err(source), CalculatorError::InvalidExpression),
                "expected invalid expression for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_parser_accepts_prebuilt_token_sequence() {
        let env = Environment::new();
        let infix = tokenize("1+2*3", &env).unwrap();

        let output = Parser::new(infix.into_iter().map(Ok)).parse().unwrap();

        assert_eq!(join(&output), "1 2 3 * +");
    }

    #[test]
    fn test_scanner_error_propagates() {
        assert!(matches!(postfix_err("1+x"), CalculatorError::InvalidExpression));
    }
}
