//! Proceed step definitions.

use around::{around, next};
use cucumber::{given, then};
use serde_json::json;

use super::world::{parse_args, AdviceWorld, Probe};

#[given(expr = "advice on {string} that proceeds with its own receiver")]
async fn given_next_advice(world: &mut AdviceWorld, name: String) {
    around(&name, |probe: &Probe, info| next(probe, &info), &mut world.target);
}

#[given(expr = "short-circuiting advice on {string} returning {string}")]
async fn given_short_circuit(world: &mut AdviceWorld, name: String, value: String) {
    around(
        &name,
        move |_probe: &Probe, _info| Ok(json!(value)),
        &mut world.target,
    );
}

#[given(expr = "advice on {string} that proceeds {int} times")]
async fn given_repeating_advice(world: &mut AdviceWorld, name: String, times: usize) {
    around(
        &name,
        move |_probe: &Probe, info| {
            let mut last = info.proceed()?;
            for _ in 1..times {
                last = info.proceed()?;
            }
            Ok(last)
        },
        &mut world.target,
    );
}

#[given(expr = "advice on {string} that proceeds with arguments {string}")]
async fn given_substituting_advice(world: &mut AdviceWorld, name: String, args: String) {
    let substitute = parse_args(&args);
    around(
        &name,
        move |_probe: &Probe, info| info.proceed_with(substitute.clone()),
        &mut world.target,
    );
}

#[then("the target method never ran")]
async fn then_never_ran(world: &mut AdviceWorld) {
    assert!(world.target.receiver().points().is_empty());
    assert!(world.target.receiver().receivers().is_empty());
}
