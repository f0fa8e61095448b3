use leptos::*;
use std::future::Future;
use std::time::Duration;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Drives `f` on a current-thread runtime inside a `LocalSet`, which is where
/// `spawn_local` lands on the host.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("build test runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&rt, f());
}

/// Lets spawned local tasks with zero-length delays run to completion.
pub async fn settle() {
    for _ in 0..5 {
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
}

/// Polls `done` until it holds or the attempts run out.
pub async fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..50 {
        if done() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    done()
}
