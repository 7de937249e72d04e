use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use handler_adapters_core::{
    with_fallible_interface, with_io_interface, with_pure_interface, without_context, Handler,
    InvocationFailure,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TestContext {
    request_id: String,
    tenant: Option<String>,
}

fn context(request_id: &str) -> TestContext {
    TestContext {
        request_id: request_id.to_string(),
        tenant: None,
    }
}

fn sample_contexts() -> Vec<TestContext> {
    vec![
        context("req-a"),
        context(""),
        TestContext {
            request_id: "req-b".to_string(),
            tenant: Some("acme".to_string()),
        },
    ]
}

fn tag(context: &TestContext, event: String) -> String {
    format!("{}|{event}", context.request_id)
}

#[tokio::test]
async fn pure_adapter_yields_handler_result_without_failure() {
    let handler = with_pure_interface(tag);

    for ctx in sample_contexts() {
        let expected = tag(&ctx, "evt".to_string());
        let output = handler.call(&ctx, "evt".to_string()).await;
        assert_eq!(output, Ok(expected));
    }
}

#[test]
fn without_context_ignores_every_context() {
    let length = without_context::<TestContext, &str, usize, _>(str::len);

    for ctx in sample_contexts() {
        assert_eq!(length(&ctx, "abcd"), 4);
    }
}

#[tokio::test]
async fn fallible_adapter_surfaces_success_and_failure() {
    let handler = with_fallible_interface(|ctx: &TestContext, event: u32| {
        if ctx.tenant.is_some() {
            Err("boom".to_string())
        } else {
            Ok(event + 1)
        }
    });

    assert_eq!(handler.call(&context("req-a"), 1).await, Ok(2));

    let tenant_ctx = TestContext {
        request_id: "req-b".to_string(),
        tenant: Some("acme".to_string()),
    };
    assert_eq!(
        handler.call(&tenant_ctx, 1).await,
        Err(InvocationFailure::new("boom"))
    );
}

#[tokio::test]
async fn io_adapter_executes_exactly_one_action_per_invocation() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let handler = with_io_interface(move |ctx: &TestContext, event: u32| {
        let counter = Arc::clone(&counter);
        let request_id = ctx.request_id.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(format!("{request_id}:{event}"))
        }
    });

    let ctx = context("req-a");
    assert_eq!(handler.call(&ctx, 7).await, Ok("req-a:7".to_string()));
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    assert_eq!(handler.call(&ctx, 7).await, Ok("req-a:7".to_string()));
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn io_adapter_runs_effects_before_reporting_failure() {
    let journal = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&journal);
    let handler = with_io_interface(move |ctx: &TestContext, event: String| {
        let sink = Arc::clone(&sink);
        let request_id = ctx.request_id.clone();
        async move {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            sink.lock()
                .expect("poisoned mutex")
                .push(format!("{request_id}:{event}"));
            Err::<String, _>("fail".to_string())
        }
    });

    let failure = handler
        .call(&context("req-z"), "write".to_string())
        .await
        .expect_err("failing action should abort the invocation");

    assert_eq!(failure.cause(), "fail");
    assert_eq!(
        journal.lock().expect("poisoned mutex").as_slice(),
        ["req-z:write".to_string()]
    );
}

#[tokio::test]
async fn context_free_identity_composes_with_pure_adapter() {
    let handler = with_pure_interface(without_context::<TestContext, &str, &str, _>(|event| event));

    for ctx in sample_contexts() {
        assert_eq!(handler.call(&ctx, "x").await, Ok("x"));
    }
}

#[tokio::test]
async fn context_free_handlers_compose_with_fallible_and_io_adapters() {
    let parse = with_fallible_interface(without_context::<TestContext, &str, _, _>(|event| {
        event
            .parse::<u16>()
            .map_err(|error| format!("invalid port: {error}"))
    }));
    assert_eq!(parse.call(&context("req-a"), "8080").await, Ok(8080));
    assert_eq!(
        parse
            .call(&context("req-a"), "http")
            .await
            .expect_err("non-numeric input should fail")
            .cause(),
        "invalid port: invalid digit found in string"
    );

    let fetch = with_io_interface(without_context::<TestContext, u8, _, _>(|event| async move {
        tokio::task::yield_now().await;
        Ok::<_, String>(u32::from(event) * 10)
    }));
    assert_eq!(fetch.call(&context("req-a"), 4).await, Ok(40));
}

fn double_non_negative(ctx: &TestContext, event: i32) -> Result<i32, String> {
    if event < 0 {
        return Err(format!("negative event for {}", ctx.request_id));
    }
    Ok(event * 2)
}

#[tokio::test]
async fn reapplied_adapters_behave_identically() {
    let first = with_fallible_interface(double_non_negative);
    let second = with_fallible_interface(double_non_negative);

    for event in [-3, 0, 5] {
        let ctx = context("req-r");
        assert_eq!(first.call(&ctx, event).await, second.call(&ctx, event).await);
        assert_eq!(first.call(&ctx, event).await, first.call(&ctx, event).await);
    }
}
