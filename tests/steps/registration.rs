//! Registration step definitions.

use std::sync::atomic::Ordering;

use around::{around, Args, Target};
use cucumber::{given, then, when};
use serde_json::{json, Value};

use super::world::{parse_args, split_list, wrapping, AdviceWorld, Probe};

// --- Given steps ---

#[given(expr = "a target whose {string} method records its call and returns {int}")]
async fn given_recording_target(world: &mut AdviceWorld, name: String, returns: i64) {
    let method = name.clone();
    world.target = Target::builder(Probe::default())
        .method(name, move |probe: &Probe, args: Args| -> around::Result<Value> {
            probe.record_call(&method, args);
            Ok(json!(returns))
        })
        .build();
}

#[given("an empty target")]
async fn given_empty_target(world: &mut AdviceWorld) {
    world.target = Target::new(Probe::default());
}

#[given(expr = "advice on {string} that only counts its runs")]
async fn given_counting_advice(world: &mut AdviceWorld, name: String) {
    let runs = world.advice_runs.clone();
    around(
        &name,
        move |_probe: &Probe, _info| {
            runs.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        },
        &mut world.target,
    );
}

#[given(expr = "wrapping advice {string} on {string}")]
async fn given_wrapping_advice(world: &mut AdviceWorld, id: String, name: String) {
    around(&name, wrapping(id), &mut world.target);
}

#[given(expr = "argument-passing advice on {string}")]
async fn given_argument_passing_advice(world: &mut AdviceWorld, name: String) {
    around(
        &name,
        |probe: &Probe, info| info.continuation().apply_with(probe, info.args.clone()),
        &mut world.target,
    );
}

// --- When steps ---

#[when(expr = "I call {string}")]
async fn when_call(world: &mut AdviceWorld, name: String) {
    world.last_result = Some(world.target.invoke(&name, vec![]));
}

#[when(expr = "I call {string} with arguments {string}")]
async fn when_call_with_args(world: &mut AdviceWorld, name: String, args: String) {
    world.last_result = Some(world.target.invoke(&name, parse_args(&args)));
}

#[when(expr = "I call {string} {int} times")]
async fn when_call_repeatedly(world: &mut AdviceWorld, name: String, times: usize) {
    for _ in 0..times {
        world.last_result = Some(world.target.invoke(&name, vec![]));
    }
}

// --- Then steps ---

#[then(expr = "the advice ran {int} times")]
async fn then_advice_ran(world: &mut AdviceWorld, times: usize) {
    assert_eq!(world.advice_runs.load(Ordering::SeqCst), times);
}

#[then(expr = "the execution points are {string}")]
async fn then_execution_points(world: &mut AdviceWorld, expected: String) {
    assert_eq!(world.target.receiver().points(), split_list(&expected));
}

#[then(expr = "{string} has {int} advice layers")]
async fn then_chain_len(world: &mut AdviceWorld, name: String, layers: usize) {
    assert_eq!(world.target.chain_len(&name), layers);
}

#[then(expr = "the target received arguments {string}")]
async fn then_received_args(world: &mut AdviceWorld, expected: String) {
    assert_eq!(world.target.receiver().received(), parse_args(&expected));
}

#[then(expr = "the call returned {int}")]
async fn then_returned_int(world: &mut AdviceWorld, expected: i64) {
    assert_eq!(world.result(), &Ok(json!(expected)));
}

#[then(expr = "the call returned {string}")]
async fn then_returned_string(world: &mut AdviceWorld, expected: String) {
    assert_eq!(world.result(), &Ok(json!(expected)));
}

#[then("the target method saw the target as its receiver")]
async fn then_receiver_preserved(world: &mut AdviceWorld) {
    let receiver = world.target.receiver();
    let expected = receiver as *const Probe as usize;
    let seen = receiver.receivers();
    assert!(!seen.is_empty(), "target method never ran");
    assert!(seen.iter().all(|addr| *addr == expected));
}
