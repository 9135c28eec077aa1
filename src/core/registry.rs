//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]` / `#[repository]` 매크로가 등록한 컴포넌트를 타입별 싱글톤으로
//! 생성하고 보관합니다. Spring 의 `ApplicationContext` 에 해당합니다.
//!
//! | Spring 개념 | 이 시스템 |
//! |-------------|-----------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Service` / `@Repository` | `#[service]` / `#[repository]` |
//! | `@Autowired` | `Arc<T>` 필드 |
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ 매크로 → ServiceRegistration / RepositoryRegistration → inventory 수집
//! 2. 기동 시
//!    ├─ RedisClient 같은 인프라 컴포넌트는 ServiceLocator::set() 으로 직접 등록
//!    └─ ServiceLocator::initialize_all() 로 등록된 컴포넌트를 미리 생성
//! 3. 사용 시
//!    └─ SessionService::instance() → ServiceLocator::get::<SessionService>()
//! ```
//!
//! 타입 이름의 접미사(`Service`, `Repository`)를 떼고 소문자로 바꾼 값이
//! 매크로의 `name` 과 일치해야 합니다. 예: `SessionRepository` ↔ `name = "session"`.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// `#[service]` 매크로가 구현하는 트레이트
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 트레이트
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

type Constructor = fn() -> Box<dyn Any + Send + Sync>;

static SERVICE_CONSTRUCTORS: Lazy<HashMap<String, (&'static str, Constructor)>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|r| (registration_key(r.name), (r.name, r.constructor)))
        .collect();
    log::debug!("Service 레지스트리 캐시 생성: {}개", cache.len());
    cache
});

static REPOSITORY_CONSTRUCTORS: Lazy<HashMap<String, (&'static str, Constructor)>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|r| (registration_key(r.name), (r.name, r.constructor)))
        .collect();
    log::debug!("Repository 레지스트리 캐시 생성: {}개", cache.len());
    cache
});

/// 매크로 등록 이름을 조회 키로 정규화합니다. (`session_service` → `session`)
fn registration_key(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 경로에서 조회 키와 종류를 구합니다. (`a::b::SessionService` → `("session", Service)`)
fn type_key(type_name: &str) -> Option<(String, ComponentKind)> {
    let short = type_name.rsplit("::").next().unwrap_or(type_name);

    if let Some(entity) = short.strip_suffix("Repository") {
        Some((entity.to_lowercase(), ComponentKind::Repository))
    } else {
        short
            .strip_suffix("Service")
            .map(|entity| (entity.to_lowercase(), ComponentKind::Service))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ComponentKind {
    Service,
    Repository,
}

pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 타입 `T` 의 싱글톤 인스턴스를 가져옵니다. 없으면 등록 정보로 생성합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 의존성이 있는 경우. 기동 시점의 프로그래밍 오류입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::cached::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자가 다른 컴포넌트를 get() 하므로 instances 락을 잡지 않은 채로 호출한다
        let created = Self::construct::<T>(type_name);

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&type_id);

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        let instance = instances
            .entry(type_id)
            .or_insert_with(|| created as Arc<dyn Any + Send + Sync>)
            .clone();

        instance
            .downcast::<T>()
            .unwrap_or_else(|_| panic!("Type mismatch in ServiceLocator: {}", type_name))
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let Some((key, kind)) = type_key(type_name) else {
            panic!(
                "Service not found: {}. Register it with #[service] / #[repository] or ServiceLocator::set()",
                type_name
            );
        };

        let table = match kind {
            ComponentKind::Service => &*SERVICE_CONSTRUCTORS,
            ComponentKind::Repository => &*REPOSITORY_CONSTRUCTORS,
        };

        let Some((registered_name, constructor)) = table.get(&key) else {
            panic!("No {:?} registered for '{}' ({})", kind, key, type_name);
        };

        match constructor().downcast::<Arc<T>>() {
            Ok(instance) => *instance,
            Err(_) => panic!("Type mismatch for {:?}: {}", kind, registered_name),
        }
    }

    /// 외부에서 만든 인스턴스를 등록합니다. (RedisClient 등)
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", type_name.rsplit("::").next().unwrap_or(type_name));

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("🔄 서비스 레지스트리 초기화");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            log::debug!("  ✓ repository {}", registration.name);
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            log::debug!("  ✓ service {}", registration.name);
            service_count += 1;
        }

        log::info!("레지스트리 초기화 완료 - repository {}개, service {}개", repo_count, service_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_key() {
        assert_eq!(registration_key("session_service"), "session");
        assert_eq!(registration_key("session_repository"), "session");
        assert_eq!(registration_key("oauth"), "oauth");
    }

    #[test]
    fn test_type_key() {
        assert_eq!(
            type_key("social_login_backend::services::auth::OAuthService"),
            Some(("oauth".to_string(), ComponentKind::Service))
        );
        assert_eq!(
            type_key("social_login_backend::repositories::sessions::SessionRepository"),
            Some(("session".to_string(), ComponentKind::Repository))
        );
        assert_eq!(type_key("social_login_backend::caching::redis::RedisClient"), None);
    }

    struct Marker(u8);

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(Marker(7)));
        let first = ServiceLocator::get::<Marker>();
        let second = ServiceLocator::get::<Marker>();
        assert_eq!(first.0, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
