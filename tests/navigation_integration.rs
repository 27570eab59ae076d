//! Integration tests for journey navigation
//!
//! Step graphs here are declared with test-only step types so each scenario
//! controls exactly which declarations exist and what conditional steps answer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use penalty_journey::navigation::{
    ConditionalInstances, ConditionalStep, Direction, NavigationError, NavigationResolver,
    ServiceError, Step, StepDeclaration, StepId, StepRegistry,
};

const COMPANY_NUMBER: &str = "12345678";
const PENALTY_REF: &str = "A1234567";
const NO_PARAMETERS: &[&str] = &[];

const A_PATH: &str = "/company/{companyNumber}/penalty/{penaltyRef}/a";
const B_PATH: &str = "/company/{companyNumber}/penalty/{penaltyRef}/b";
const C_PATH: &str = "/company/{companyNumber}/penalty/{penaltyRef}/c";

// ─── Step Declarations ────────────────────────────────────────────────────────

struct StepA;
struct StepC;

/// Conditional step that never renders and counts how often it was asked
struct StepB {
    calls: Arc<AtomicUsize>,
}

impl Step for StepA {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route(A_PATH).next::<StepB>()
    }
}

impl Step for StepB {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route(B_PATH)
            .next::<StepC>()
            .previous::<StepA>()
            .conditional()
    }
}

impl ConditionalStep for StepB {
    fn will_render(&self, path_parameters: &[String]) -> Result<bool, ServiceError> {
        assert_eq!(path_parameters, [COMPANY_NUMBER, PENALTY_REF]);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }
}

impl Step for StepC {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route(C_PATH).previous::<StepB>()
    }
}

/// Plain chain without conditional steps
struct First;
struct Second;

impl Step for First {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .routes(["/first", "/first/{companyNumber}/{penaltyRef}"])
            .next::<Second>()
    }
}

impl Step for Second {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .routes(["/second", "/second/{companyNumber}/{penaltyRef}"])
            .previous::<First>()
    }
}

/// Steps with broken declarations
struct NoEdges;
struct PointsAtUnrouted;
struct Unrouted;
struct PointsAtEmpty;
struct EmptyRoutes;
struct PointsAtThreeSlots;
struct ThreeSlots;

impl Step for NoEdges {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route("/no-edges")
    }
}

impl Step for PointsAtUnrouted {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/points-at-unrouted")
            .next::<Unrouted>()
            .previous::<Unrouted>()
    }
}

impl Step for Unrouted {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().next::<NoEdges>()
    }
}

impl Step for PointsAtEmpty {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/points-at-empty")
            .next::<EmptyRoutes>()
    }
}

impl Step for EmptyRoutes {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().routes(Vec::<String>::new())
    }
}

impl Step for PointsAtThreeSlots {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/points-at-three")
            .next::<ThreeSlots>()
    }
}

impl Step for ThreeSlots {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route("/{one}/{two}/{three}")
    }
}

/// Conditional step whose predicate fails
struct Failing;
struct AfterFailing;

impl Step for Failing {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/failing")
            .next::<AfterFailing>()
            .conditional()
    }
}

impl ConditionalStep for Failing {
    fn will_render(&self, _path_parameters: &[String]) -> Result<bool, ServiceError> {
        Err(ServiceError::Upstream {
            service: "penalty-api".to_string(),
            message: "timeout".to_string(),
        })
    }
}

impl Step for AfterFailing {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route("/after-failing")
    }
}

// ─── Test Context ─────────────────────────────────────────────────────────────

struct Journey {
    resolver: NavigationResolver,
    b_calls: Arc<AtomicUsize>,
}

impl Journey {
    fn new() -> Self {
        let mut registry = StepRegistry::new();
        registry
            .register::<StepA>()
            .register::<StepB>()
            .register::<StepC>()
            .register::<First>()
            .register::<Second>()
            .register::<NoEdges>()
            .register::<PointsAtUnrouted>()
            .register::<Unrouted>()
            .register::<PointsAtEmpty>()
            .register::<EmptyRoutes>()
            .register::<PointsAtThreeSlots>()
            .register::<ThreeSlots>();

        let b_calls = Arc::new(AtomicUsize::new(0));
        let calls = Arc::clone(&b_calls);

        let mut instances = ConditionalInstances::new();
        instances.register(move || StepB {
            calls: Arc::clone(&calls),
        });

        Self {
            resolver: NavigationResolver::new(Arc::new(registry), Arc::new(instances)),
            b_calls,
        }
    }

    fn b_calls(&self) -> usize {
        self.b_calls.load(Ordering::SeqCst)
    }
}

fn expected(template: &str) -> String {
    template
        .replace("{companyNumber}", COMPANY_NUMBER)
        .replace("{penaltyRef}", PENALTY_REF)
}

// ─── Missing Declarations ─────────────────────────────────────────────────────

#[test]
fn test_next_without_forward_edge() {
    let journey = Journey::new();
    let err = journey
        .resolver
        .next_step::<NoEdges>(NO_PARAMETERS)
        .unwrap_err();

    assert!(matches!(
        err,
        NavigationError::MissingEdge {
            direction: Direction::Forward,
            step
        } if step == StepId::of::<NoEdges>()
    ));
    assert_eq!(
        err.to_string(),
        format!(
            "Missing next step declaration on {}",
            StepId::of::<NoEdges>().name()
        )
    );
}

#[test]
fn test_previous_without_backward_edge() {
    let journey = Journey::new();
    let err = journey
        .resolver
        .previous_step::<NoEdges>(NO_PARAMETERS)
        .unwrap_err();

    assert!(matches!(
        err,
        NavigationError::MissingEdge {
            direction: Direction::Backward,
            step
        } if step == StepId::of::<NoEdges>()
    ));
    assert!(err.to_string().starts_with("Missing previous step declaration"));
}

#[test]
fn test_target_without_route_mapping() {
    let journey = Journey::new();

    for result in [
        journey.resolver.next_step::<PointsAtUnrouted>(NO_PARAMETERS),
        journey.resolver.previous_step::<PointsAtUnrouted>(NO_PARAMETERS),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            NavigationError::MissingRoute(step) if step == StepId::of::<Unrouted>()
        ));
        assert_eq!(
            err.to_string(),
            format!("Missing route mapping on {}", StepId::of::<Unrouted>().name())
        );
    }
}

#[test]
fn test_target_with_empty_route_mapping() {
    let journey = Journey::new();
    let err = journey
        .resolver
        .next_step::<PointsAtEmpty>(NO_PARAMETERS)
        .unwrap_err();

    assert!(matches!(
        err,
        NavigationError::EmptyRoute(step) if step == StepId::of::<EmptyRoutes>()
    ));
    assert_eq!(
        err.to_string(),
        format!(
            "Missing route mapping value on {}",
            StepId::of::<EmptyRoutes>().name()
        )
    );
}

#[test]
fn test_no_template_matches_parameter_count() {
    let journey = Journey::new();
    let err = journey
        .resolver
        .next_step::<PointsAtThreeSlots>(NO_PARAMETERS)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No mapping found that matches the number of path variables provided"
    );
}

// ─── Conditional Skipping ─────────────────────────────────────────────────────

#[test]
fn test_next_skips_conditional_step() {
    let journey = Journey::new();
    let next = journey
        .resolver
        .next_step::<StepA>(&[COMPANY_NUMBER, PENALTY_REF])
        .unwrap();

    assert_eq!(next, format!("redirect:{}", expected(C_PATH)));
    assert_eq!(journey.b_calls(), 1);
}

#[test]
fn test_previous_skips_conditional_step() {
    let journey = Journey::new();
    let previous = journey
        .resolver
        .previous_step::<StepC>(&[COMPANY_NUMBER, PENALTY_REF])
        .unwrap();

    assert_eq!(previous, expected(A_PATH));
    assert!(!previous.starts_with("redirect:"));
    assert_eq!(journey.b_calls(), 1);
}

#[test]
fn test_predicate_failure_propagates() {
    let mut registry = StepRegistry::new();
    registry.register::<PointsAtFailing>().register::<Failing>();
    let mut instances = ConditionalInstances::new();
    instances.register(|| Failing);
    let resolver = NavigationResolver::new(Arc::new(registry), Arc::new(instances));

    let err = resolver
        .next_step::<PointsAtFailing>(NO_PARAMETERS)
        .unwrap_err();
    assert!(matches!(
        err,
        NavigationError::NavigationFailure {
            step,
            source: ServiceError::Upstream { .. }
        } if step == StepId::of::<Failing>()
    ));
}

struct PointsAtFailing;

impl Step for PointsAtFailing {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route("/points-at-failing").next::<Failing>()
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

#[test]
fn test_resolution_is_idempotent() {
    let journey = Journey::new();
    let params = [COMPANY_NUMBER, PENALTY_REF];

    let first = journey.resolver.next_step::<StepA>(&params).unwrap();
    let second = journey.resolver.next_step::<StepA>(&params).unwrap();

    assert_eq!(first, second);
    assert_eq!(journey.b_calls(), 2);
}

#[test]
fn test_next_then_previous_round_trips() {
    let journey = Journey::new();

    for params in [vec![], vec![COMPANY_NUMBER, PENALTY_REF]] {
        let next = journey
            .resolver
            .resolve(StepId::of::<First>(), Direction::Forward, &params)
            .unwrap();
        assert!(next.path().starts_with("/second"));

        let back = journey.resolver.previous_step::<Second>(&params).unwrap();
        let first_template = if params.is_empty() {
            "/first".to_string()
        } else {
            expected("/first/{companyNumber}/{penaltyRef}")
        };
        assert_eq!(back, first_template);
    }
}

#[test]
fn test_concurrent_resolutions() {
    let journey = Arc::new(Journey::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let journey = Arc::clone(&journey);
            std::thread::spawn(move || {
                journey
                    .resolver
                    .next_step::<StepA>(&[COMPANY_NUMBER, PENALTY_REF])
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            format!("redirect:{}", expected(C_PATH))
        );
    }
    assert_eq!(journey.b_calls(), 8);
}

// ─── Skip Chains ──────────────────────────────────────────────────────────────

/// Conditional step that never renders, with its own call counter
struct Hidden<const N: usize> {
    calls: Arc<AtomicUsize>,
}

impl<const N: usize> ConditionalStep for Hidden<N> {
    fn will_render(&self, _path_parameters: &[String]) -> Result<bool, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }
}

struct ChainStart;
struct ChainEnd;

impl Step for ChainStart {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().route("/chain/start").next::<Hidden<1>>()
    }
}

impl Step for Hidden<1> {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/chain/hidden-one/{penaltyRef}")
            .next::<Hidden<2>>()
            .conditional()
    }
}

impl Step for Hidden<2> {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/chain/hidden-two/{penaltyRef}")
            .next::<ChainEnd>()
            .conditional()
    }
}

impl Step for ChainEnd {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/chain/end/{penaltyRef}")
            .previous::<Hidden<3>>()
    }
}

// skipped going back, but declares nowhere further back to go
impl Step for Hidden<3> {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/chain/dead-end/{penaltyRef}")
            .conditional()
    }
}

struct Chain {
    resolver: NavigationResolver,
    calls: [Arc<AtomicUsize>; 3],
}

impl Chain {
    fn new() -> Self {
        let mut registry = StepRegistry::new();
        registry
            .register::<ChainStart>()
            .register::<Hidden<1>>()
            .register::<Hidden<2>>()
            .register::<Hidden<3>>()
            .register::<ChainEnd>();

        let calls: [Arc<AtomicUsize>; 3] = Default::default();
        let mut instances = ConditionalInstances::new();
        let one = Arc::clone(&calls[0]);
        let two = Arc::clone(&calls[1]);
        let three = Arc::clone(&calls[2]);
        instances
            .register(move || Hidden::<1> {
                calls: Arc::clone(&one),
            })
            .register(move || Hidden::<2> {
                calls: Arc::clone(&two),
            })
            .register(move || Hidden::<3> {
                calls: Arc::clone(&three),
            });

        Self {
            resolver: NavigationResolver::new(Arc::new(registry), Arc::new(instances)),
            calls,
        }
    }

    fn calls(&self) -> [usize; 3] {
        [0, 1, 2].map(|i| self.calls[i].load(Ordering::SeqCst))
    }
}

#[test]
fn test_next_skips_consecutive_conditional_steps() {
    let chain = Chain::new();
    let next = chain.resolver.next_step::<ChainStart>(&[PENALTY_REF]).unwrap();

    assert_eq!(next, format!("redirect:/chain/end/{PENALTY_REF}"));
    assert_eq!(chain.calls(), [1, 1, 0]);
}

#[test]
fn test_skipped_step_without_onward_edge() {
    let chain = Chain::new();
    let err = chain
        .resolver
        .previous_step::<ChainEnd>(&[PENALTY_REF])
        .unwrap_err();

    assert!(matches!(
        err,
        NavigationError::MissingEdge {
            direction: Direction::Backward,
            step
        } if step == StepId::of::<Hidden<3>>()
    ));
    assert_eq!(
        err.to_string(),
        format!(
            "Missing previous step declaration on {}",
            StepId::of::<Hidden<3>>().name()
        )
    );
    assert_eq!(chain.calls(), [0, 0, 1]);
}

// ─── Blank Templates ──────────────────────────────────────────────────────────

struct PointsAtPartlyBlank;
struct PartlyBlank;

impl Step for PointsAtPartlyBlank {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route("/points-at-partly-blank")
            .next::<PartlyBlank>()
    }
}

impl Step for PartlyBlank {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new().routes(["", "/partly-blank"])
    }
}

#[test]
fn test_blank_template_never_becomes_destination() {
    let mut registry = StepRegistry::new();
    registry
        .register::<PointsAtPartlyBlank>()
        .register::<PartlyBlank>();
    let resolver = NavigationResolver::new(
        Arc::new(registry),
        Arc::new(ConditionalInstances::new()),
    );

    let next = resolver
        .next_step::<PointsAtPartlyBlank>(NO_PARAMETERS)
        .unwrap();
    assert_eq!(next, "redirect:/partly-blank");
    assert!(resolver.registry().validate().is_err());
}
