//! Integration tests for call tracing
//!
//! Tests that traced catalogues record calls without changing results.

use tessera_foundation::{CallError, Callable, Object};
use tessera_stdlib::trace::{HumanFormatter, TraceEvent, TraceFormatter};
use tessera_stdlib::{Stdlib, StdlibConfig, TracerConfig};

fn call(stdlib: &Stdlib, module: &str, name: &str, args: &[Object]) -> Result<Object, CallError> {
    let module = stdlib.module(module).unwrap();
    let builtin = module.get(name).and_then(Object::as_builtin).unwrap().clone();
    builtin.call(args)
}

#[test]
fn traced_results_match_untraced_results() {
    let plain = Stdlib::new();
    let traced = Stdlib::with_config(&StdlibConfig::traced());

    let cases: [(&str, &str, Vec<Object>); 4] = [
        ("math", "pow", vec![Object::Float(2.0), Object::Float(3.0)]),
        ("text", "atoi", vec![Object::from("x")]),
        ("text", "split", vec![Object::from("a b"), Object::from(" ")]),
        ("math", "abs", vec![]),
    ];
    for (module, name, args) in &cases {
        assert_eq!(
            call(&plain, module, name, args),
            call(&traced, module, name, args)
        );
    }
}

#[test]
fn every_outcome_is_recorded() {
    let stdlib = Stdlib::with_config(&StdlibConfig::traced());

    call(&stdlib, "math", "abs", &[Object::Float(-1.0)]).unwrap();
    call(&stdlib, "text", "atoi", &[Object::from("x")]).unwrap();
    call(&stdlib, "math", "abs", &[Object::Int(1)]).unwrap_err();

    let tracer = stdlib.tracer().lock().unwrap();
    let types: Vec<_> = tracer.buffer().iter().map(|r| r.event_type()).collect();
    assert_eq!(
        types,
        vec!["call", "returned", "call", "error-value", "call", "rejected"]
    );

    let failures: Vec<_> = tracer
        .buffer()
        .filter(|r| r.event.is_failure())
        .into_iter()
        .map(|r| r.event.function().to_string())
        .collect();
    assert_eq!(failures, vec!["text.atoi", "math.abs"]);
}

#[test]
fn buffer_size_bounds_history() {
    let config = StdlibConfig::new()
        .only(["math"])
        .with_trace(TracerConfig::new().enabled().with_buffer_size(4));
    let stdlib = Stdlib::with_config(&config);

    for _ in 0..10 {
        call(&stdlib, "math", "floor", &[Object::Float(1.5)]).unwrap();
    }

    let tracer = stdlib.tracer().lock().unwrap();
    assert_eq!(tracer.buffer().len(), 4);
    assert_eq!(tracer.stats().evicted, 16);
}

#[test]
fn event_filter_keeps_only_failures() {
    let trace = TracerConfig::new()
        .enabled()
        .filter_events(vec!["rejected".to_string(), "error-value".to_string()]);
    let stdlib = Stdlib::with_config(&StdlibConfig::new().with_trace(trace));

    call(&stdlib, "math", "ceil", &[Object::Float(0.5)]).unwrap();
    call(&stdlib, "math", "ceil", &[]).unwrap_err();

    let tracer = stdlib.tracer().lock().unwrap();
    assert_eq!(tracer.buffer().len(), 1);
    let record = tracer.buffer().last().unwrap();
    assert!(matches!(
        &record.event,
        TraceEvent::Rejected { function, .. } if &**function == "math.ceil"
    ));
}

#[test]
fn records_format_for_humans() {
    let stdlib = Stdlib::with_config(&StdlibConfig::traced());
    call(&stdlib, "text", "to_upper", &[Object::from("a")]).unwrap();

    let tracer = stdlib.tracer().lock().unwrap();
    let records = tracer.buffer().recent(2);
    assert_eq!(
        HumanFormatter::new().format_many(&records),
        "CALL text.to_upper/1\n  RETURN text.to_upper -> string"
    );
}
