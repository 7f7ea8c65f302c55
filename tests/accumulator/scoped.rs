use crate::common::{RecordedException, RecordingHost};
use decode_rail::{DecodeError, ErrorKind, ScopedErrorAccumulator};
use std::panic::{self, AssertUnwindSafe};

#[test]
fn drop_schedules_pending_error_once() {
    let mut host = RecordingHost::new();
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "");
        errors.runtime_error(format_args!("boom"));
    }

    assert_eq!(host.created, 1);
    assert_eq!(
        host.scheduled,
        [RecordedException {
            kind: ErrorKind::RuntimeError,
            message: "boom".to_string(),
        }]
    );
    assert!(host.pending.is_none());
}

#[test]
fn drop_without_error_schedules_nothing() {
    let mut host = RecordingHost::new();
    {
        let _errors = ScopedErrorAccumulator::new(&mut host, "compile()");
    }

    assert_eq!(host.created, 0);
    assert!(host.scheduled.is_empty());
}

#[test]
fn drop_after_reset_schedules_nothing() {
    let mut host = RecordingHost::new();
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "compile()");
        errors.compile_error(format_args!("handled"));
        errors.reset();
    }

    assert!(host.scheduled.is_empty());
}

#[test]
fn drop_after_reify_does_not_report_twice() {
    let mut host = RecordingHost::new();
    let exception = {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "compile()");
        errors.compile_error(format_args!("thrown by caller"));
        let exception = errors.reify();
        exception
    };

    assert_eq!(exception.kind, ErrorKind::CompileError);
    assert_eq!(host.created, 1);
    assert!(host.scheduled.is_empty());
}

#[test]
fn error_set_after_reify_is_still_scheduled() {
    let mut host = RecordingHost::new();
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "");
        errors.type_error(format_args!("first"));
        let _ = errors.reify();
        errors.link_error(format_args!("second"));
    }

    assert_eq!(host.scheduled.len(), 1);
    assert_eq!(host.scheduled[0].kind, ErrorKind::LinkError);
    assert_eq!(host.scheduled[0].message, "second");
}

#[test]
fn only_last_error_is_scheduled() {
    let mut host = RecordingHost::new();
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "Instance()");
        errors.type_error(format_args!("bad imports object"));
        errors.link_error(format_args!("import 0 is not a function"));
    }

    assert_eq!(
        host.scheduled,
        [RecordedException {
            kind: ErrorKind::LinkError,
            message: "Instance(): import 0 is not a function".to_string(),
        }]
    );
}

#[test]
fn early_return_flushes_error() {
    fn compile(host: &mut RecordingHost, bytes: &[u8]) -> bool {
        let mut errors = ScopedErrorAccumulator::new(host, "compile()");
        if bytes.is_empty() {
            errors.compile_failed(&DecodeError::new(0, "BufferSource argument is empty"));
            return false;
        }
        true
    }

    let mut host = RecordingHost::new();
    assert!(compile(&mut host, b"\0asm"));
    assert!(!compile(&mut host, b""));

    assert_eq!(host.scheduled.len(), 1);
    assert_eq!(host.scheduled[0].message, "compile(): BufferSource argument is empty @+0");
}

#[test]
fn unwinding_flushes_error() {
    let mut host = RecordingHost::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "start()");
        errors.runtime_error(format_args!("trap"));
        panic!("start function trapped");
    }));

    assert!(outcome.is_err());
    assert_eq!(host.scheduled.len(), 1);
    assert_eq!(host.scheduled[0].message, "start(): trap");
}

#[test]
fn existing_scheduled_exception_wins() {
    let mut host = RecordingHost::with_scheduled(ErrorKind::TypeError, "from another call");
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "");
        errors.compile_error(format_args!("ignored"));
    }

    assert_eq!(host.created, 0);
    assert_eq!(
        host.scheduled,
        [RecordedException {
            kind: ErrorKind::TypeError,
            message: "from another call".to_string(),
        }]
    );
}

#[test]
fn pending_host_exception_is_rescheduled() {
    let mut host = RecordingHost::with_pending(ErrorKind::RuntimeError, "start function threw");
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "Instance()");
        errors.link_error(format_args!("ignored"));
    }

    assert_eq!(host.created, 0);
    assert_eq!(host.rescheduled, 1);
    assert!(host.pending.is_none());
    assert_eq!(
        host.scheduled,
        [RecordedException {
            kind: ErrorKind::RuntimeError,
            message: "start function threw".to_string(),
        }]
    );
}

#[test]
fn pending_host_exception_is_rescheduled_without_own_error() {
    let mut host = RecordingHost::with_pending(ErrorKind::RangeError, "stack overflow");
    {
        let _errors = ScopedErrorAccumulator::new(&mut host, "");
    }

    assert_eq!(host.rescheduled, 1);
    assert_eq!(host.scheduled.len(), 1);
}

#[test]
fn derefs_to_accumulator_api() {
    let mut host = RecordingHost::new();
    {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "validate()");
        errors.compile_failed(&DecodeError::new(10, "bad byte"));

        assert!(errors.error());
        assert!(errors.wasm_error());
        assert_eq!(errors.error_msg(), "validate(): bad byte @+10");
        assert_eq!(errors.context(), "validate()");
    }

    assert_eq!(host.scheduled.len(), 1);
}

#[test]
fn works_through_trait_object() {
    use decode_rail::HostRuntime;

    let mut host = RecordingHost::new();
    {
        let dyn_host: &mut dyn HostRuntime<Exception = RecordedException> = &mut host;
        let mut errors = ScopedErrorAccumulator::new(dyn_host, "");
        errors.range_error(format_args!("out of bounds"));
    }

    assert_eq!(host.scheduled[0].kind, ErrorKind::RangeError);
}

#[test]
fn debug_wraps_inner_accumulator() {
    let mut host = RecordingHost::new();
    let errors = ScopedErrorAccumulator::new(&mut host, "ctx");

    let debug = format!("{errors:?}");
    assert!(debug.starts_with("ScopedErrorAccumulator(ErrorAccumulator"));
}
