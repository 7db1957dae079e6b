use super::*;
use crate::kernel::services::ports::{BoxFuture, BuiltinScreenLoader, LoadError};

struct SlowLoader {
    delay: Duration,
}

impl ScreenLoader for SlowLoader {
    fn load(
        &self,
        kind: ScreenKind,
        program: ProgramId,
    ) -> BoxFuture<'static, Result<Screen, LoadError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(Screen::new(kind, program))
        })
    }
}

struct FailingLoader;

impl ScreenLoader for FailingLoader {
    fn load(
        &self,
        kind: ScreenKind,
        _program: ProgramId,
    ) -> BoxFuture<'static, Result<Screen, LoadError>> {
        Box::pin(async move {
            Err(LoadError {
                kind,
                reason: "chunk missing".to_string(),
            })
        })
    }
}

fn resolver_with(loader: Arc<dyn ScreenLoader>, timeout: Duration) -> ProgramResolver {
    let mut registry = ProgramRegistry::new();
    registry.insert(ProgramId::from("1"), "pages/CompanyManagement.jsx".to_string());
    ProgramResolver::new(registry, loader, timeout)
}

#[tokio::test]
async fn resolves_registered_program() {
    let resolver = resolver_with(Arc::new(BuiltinScreenLoader), Duration::from_secs(1));
    let resolution = resolver.resolve(&ProgramId::from("1")).await;
    assert_eq!(
        resolution,
        Resolution::Found(Screen::new(ScreenKind::CompanyManagement, ProgramId::from("1")))
    );
}

#[tokio::test]
async fn dashboard_resolves_without_registry_entry() {
    let resolver = resolver_with(Arc::new(BuiltinScreenLoader), Duration::from_secs(1));
    let Resolution::Found(screen) = resolver.resolve(&ProgramId::dashboard()).await else {
        panic!("dashboard should resolve");
    };
    assert_eq!(screen.kind(), ScreenKind::Dashboard);
}

#[tokio::test]
async fn registry_miss_is_not_found() {
    let resolver = resolver_with(Arc::new(BuiltinScreenLoader), Duration::from_secs(1));
    assert_eq!(resolver.resolve(&ProgramId::from("404")).await, Resolution::NotFound);
}

#[tokio::test]
async fn slow_load_times_out_as_not_found() {
    let loader = Arc::new(SlowLoader {
        delay: Duration::from_millis(500),
    });
    let resolver = resolver_with(loader, Duration::from_millis(20));
    assert_eq!(resolver.resolve(&ProgramId::from("1")).await, Resolution::NotFound);
}

#[tokio::test]
async fn loader_error_is_not_found() {
    let resolver = resolver_with(Arc::new(FailingLoader), Duration::from_secs(1));
    assert_eq!(resolver.resolve(&ProgramId::from("1")).await, Resolution::NotFound);
}

#[test]
fn with_registry_keeps_loader_and_timeout() {
    let resolver = resolver_with(Arc::new(BuiltinScreenLoader), Duration::from_millis(77));
    let swapped = resolver.with_registry(ProgramRegistry::new());
    assert_eq!(swapped.lookup(&ProgramId::from("1")), None);
    assert_eq!(swapped.timeout, Duration::from_millis(77));
    assert_eq!(
        resolver.lookup(&ProgramId::from("1")),
        Some(ScreenKind::CompanyManagement)
    );
}
