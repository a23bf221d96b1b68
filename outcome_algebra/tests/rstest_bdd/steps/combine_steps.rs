//! Steps combining three heterogeneous outcomes in one binder block.

use crate::fixtures::{CombineContext, Failing};
use anyhow::{Result, anyhow, ensure};
use outcome_algebra::{Extract, Fault, Outcome, binding};
use rstest_bdd_macros::{given, then, when};
use test_helpers::evaluation::EvaluationLog;

#[given("input one is Success {value:i32}")]
fn one_succeeds(combine_context: &CombineContext, value: i32) {
    combine_context.one.set(Outcome::success(value));
}

#[given("input one is Failure {message}")]
fn one_fails(combine_context: &CombineContext, message: String) {
    combine_context.one.set(Outcome::failure(message));
}

#[given("input two is Success {value:i32}")]
fn two_succeeds(combine_context: &CombineContext, value: i32) {
    combine_context.two.set(Outcome::success(value));
}

#[given("input two faults with {message}")]
fn two_faults(combine_context: &CombineContext, message: String) {
    combine_context.two.set(Outcome::failure(Fault::new(message)));
}

#[given("input three is Success {value:i32}")]
fn three_succeeds(combine_context: &CombineContext, value: i32) {
    combine_context.three.set(Outcome::success(value));
}

#[given("input three is Failure {flag}")]
fn three_fails(combine_context: &CombineContext, flag: String) -> Result<()> {
    let parsed: bool = flag.trim().parse()?;
    combine_context.three.set(Outcome::failure(parsed));
    Ok(())
}

#[when("the inputs are combined")]
fn combine_inputs(combine_context: &CombineContext) -> Result<()> {
    let one = combine_context
        .one
        .take()
        .ok_or_else(|| anyhow!("input one was not given"))?;
    let two = combine_context
        .two
        .take()
        .ok_or_else(|| anyhow!("input two was not given"))?;
    let three = combine_context
        .three
        .take()
        .ok_or_else(|| anyhow!("input three was not given"))?;
    let log = EvaluationLog::default();

    let result: Outcome<Failing, i32> = binding(|| {
        let a = log.track("one", one).map_error(Failing::First).extract()?;
        let b = log.track("two", two).map_error(Failing::Second).extract()?;
        let c = log.track("three", three).map_error(Failing::Third).extract()?;
        Ok(a + b + c)
    });

    combine_context.result.set(result);
    combine_context.log.set(log);
    Ok(())
}

#[then("the block result is Success {expected:i32}")]
fn block_succeeds(combine_context: &CombineContext, expected: i32) -> Result<()> {
    let result = combine_context
        .result
        .take()
        .ok_or_else(|| anyhow!("inputs were not combined"))?;
    ensure!(
        result == Outcome::success(expected),
        "expected Success {expected}, got {result:?}"
    );
    Ok(())
}

#[then("the block fails at input {position} reporting {detail}")]
fn block_fails(combine_context: &CombineContext, position: String, detail: String) -> Result<()> {
    let result = combine_context
        .result
        .take()
        .ok_or_else(|| anyhow!("inputs were not combined"))?;
    let failure = result
        .failure_value()
        .ok_or_else(|| anyhow!("expected the block to fail"))?;
    ensure!(
        failure.position() == position,
        "expected input {position} to fail, got {failure:?}"
    );
    ensure!(
        failure.detail() == detail,
        "expected failure detail {detail}, got {}",
        failure.detail()
    );
    Ok(())
}

#[then("exactly {count:usize} inputs were evaluated")]
fn evaluated_count(combine_context: &CombineContext, count: usize) -> Result<()> {
    let evaluated = combine_context
        .log
        .with_ref(EvaluationLog::count)
        .ok_or_else(|| anyhow!("inputs were not combined"))?;
    ensure!(
        evaluated == count,
        "expected {count} evaluated inputs, got {evaluated}"
    );
    Ok(())
}
