use std::collections::HashSet;
use std::sync::Mutex as StdMutex;

use super::*;

const DOTNET: &str = "http://dotnet:5086";
const JAVA: &str = "http://java:5087";

#[derive(Default)]
struct MockProbe {
    alive: StdMutex<HashSet<String>>,
    calls: StdMutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockProbe {
    fn with_alive(urls: &[&str]) -> Self {
        let probe = Self::default();
        probe.set_alive(urls);
        probe
    }

    fn set_alive(&self, urls: &[&str]) {
        *self.alive.lock().unwrap() = urls.iter().map(|u| (*u).to_owned()).collect();
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BackendProbe for MockProbe {
    async fn is_alive(&self, base_url: &str) -> bool {
        self.calls.lock().unwrap().push(base_url.to_owned());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.alive.lock().unwrap().contains(base_url)
    }
}

fn selector(probe: &Arc<MockProbe>) -> BackendSelector {
    BackendSelector::new(vec![DOTNET.to_owned(), JAVA.to_owned()], probe.clone())
}

#[tokio::test]
async fn prefers_first_live_candidate() {
    let probe = Arc::new(MockProbe::with_alive(&[DOTNET, JAVA]));
    let sel = selector(&probe);

    assert_eq!(sel.resolve().await.as_deref(), Some(DOTNET));
    assert_eq!(probe.calls(), vec![DOTNET]);
}

#[tokio::test]
async fn falls_through_to_second_candidate() {
    let probe = Arc::new(MockProbe::with_alive(&[JAVA]));
    let sel = selector(&probe);

    assert_eq!(sel.resolve().await.as_deref(), Some(JAVA));
    assert_eq!(probe.calls(), vec![DOTNET, JAVA]);
}

#[tokio::test]
async fn none_when_nothing_answers() {
    let probe = Arc::new(MockProbe::default());
    let sel = selector(&probe);

    assert_eq!(sel.resolve().await, None);
    assert_eq!(sel.active().await, None);
}

#[tokio::test]
async fn active_backend_is_cached() {
    let probe = Arc::new(MockProbe::with_alive(&[DOTNET]));
    let sel = selector(&probe);

    sel.resolve().await;
    sel.resolve().await;
    sel.resolve().await;
    assert_eq!(probe.calls().len(), 1);
}

#[tokio::test]
async fn unreachable_round_reprobes_next_time() {
    let probe = Arc::new(MockProbe::default());
    let sel = selector(&probe);

    assert_eq!(sel.resolve().await, None);
    probe.set_alive(&[JAVA]);
    assert_eq!(sel.resolve().await.as_deref(), Some(JAVA));
    assert_eq!(probe.calls().len(), 4);
}

#[tokio::test]
async fn invalidate_switches_backend() {
    let probe = Arc::new(MockProbe::with_alive(&[DOTNET, JAVA]));
    let sel = selector(&probe);
    assert_eq!(sel.resolve().await.as_deref(), Some(DOTNET));

    probe.set_alive(&[JAVA]);
    sel.invalidate(DOTNET).await;
    assert_eq!(sel.active().await, None);
    assert_eq!(sel.resolve().await.as_deref(), Some(JAVA));
}

#[tokio::test]
async fn invalidate_ignores_stale_url() {
    let probe = Arc::new(MockProbe::with_alive(&[JAVA]));
    let sel = selector(&probe);
    sel.resolve().await;

    sel.invalidate(DOTNET).await;
    assert_eq!(sel.active().await.as_deref(), Some(JAVA));
}

#[tokio::test]
async fn concurrent_resolves_share_one_round() {
    let probe = Arc::new(MockProbe {
        delay: Some(Duration::from_millis(20)),
        ..MockProbe::with_alive(&[JAVA])
    });
    let sel = Arc::new(selector(&probe));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sel = sel.clone();
            tokio::spawn(async move { sel.resolve().await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().as_deref(), Some(JAVA));
    }
    assert_eq!(probe.calls(), vec![DOTNET, JAVA]);
}

#[tokio::test]
async fn subscribers_see_changes() {
    let probe = Arc::new(MockProbe::with_alive(&[DOTNET]));
    let sel = selector(&probe);
    let mut rx = sel.subscribe();

    sel.resolve().await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().as_deref(), Some(DOTNET));

    sel.invalidate(DOTNET).await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), None);
}

#[tokio::test]
async fn status_lists_candidates() {
    let probe = Arc::new(MockProbe::default());
    let sel = selector(&probe);
    let status = sel.status().await;
    assert_eq!(status, BackendStatus { active: None, candidates: vec![DOTNET.into(), JAVA.into()] });
}
