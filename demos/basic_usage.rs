// ============================================================================
// Basic Usage Example
// ============================================================================

use rational::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    rational::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Rational Example ===\n");

    // Construction and rendering
    let mut a = Rational::from(7);
    let mut b = Rational::new(5, 3);
    let mut c = b.clone();
    let mut d = Rational::take_from(&mut c);

    println!("Value of a is {}", a.render()?);
    println!("Value of b is {}", b.render()?);
    println!("Value of c is {}", c.render()?);
    println!("Value of d is {}", d.render()?);

    // Strict context
    let strict = ArithmeticBuilder::strict().build(Arc::new(LoggingEventHandler))?;

    println!("\n=== Strict Arithmetic ===");
    let half = Rational::new(1, 2);
    let third = Rational::new(1, 3);
    for op in Operation::ALL {
        let mut result = strict.evaluate(op, &half, &third)?;
        println!("  {} {} {} = {}", half, op.symbol(), third, strict.render(&mut result)?);
    }

    match strict.divide(&half, &Rational::ZERO) {
        Ok(result) => println!("  unexpected: {}", result),
        Err(e) => println!("  {} / 0/1 -> {}", half, e),
    }

    // Legacy context
    let recorder = Arc::new(RecordingEventHandler::new());
    let legacy = ArithmeticBuilder::legacy().build(recorder.clone())?;

    println!("\n=== Legacy Arithmetic ===");
    let preserved = legacy.divide(&half, &Rational::ZERO)?;
    println!("  {} / 0/1 = {}", half, preserved);
    let wrapped = legacy.add(&Rational::from(i64::MAX), &Rational::ONE)?;
    println!("  i64::MAX + 1 = {}", wrapped);

    println!("\nRecorded events:");
    for event in recorder.drain() {
        println!("  {:?}", event);
    }

    // Reduction is explicit
    let product = strict.multiply(&Rational::new(2, 3), &Rational::new(3, 4))?;
    println!("\n2/3 * 3/4 = {} (reduced: {})", product, product.reduced()?);

    Ok(())
}
