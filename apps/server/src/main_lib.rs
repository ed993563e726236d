use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use buntubuild_ai::{AdvisorTrait, HttpAdvisor};
use buntubuild_core::escrow::{EscrowService, EscrowServiceTrait};
use buntubuild_core::goals::{GoalService, GoalServiceTrait};
use buntubuild_core::profiles::{ProfileService, ProfileServiceTrait};
use buntubuild_core::roles::{RoleService, RoleServiceTrait};
use buntubuild_core::transactions::{TransactionService, TransactionServiceTrait};
use buntubuild_storage_sqlite::db::{self, write_actor};
use buntubuild_storage_sqlite::escrow::EscrowRepository;
use buntubuild_storage_sqlite::goals::GoalRepository;
use buntubuild_storage_sqlite::profiles::ProfileRepository;
use buntubuild_storage_sqlite::roles::RoleRepository;
use buntubuild_storage_sqlite::transactions::TransactionRepository;

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub escrow_service: Arc<dyn EscrowServiceTrait>,
    pub role_service: Arc<dyn RoleServiceTrait>,
    pub advisor: Arc<dyn AdvisorTrait>,
    pub auth: AuthManager,
    /// Sign-ups with this email are created as the admin account.
    pub admin_email: Option<String>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("BB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(goal_repository));

    let transaction_repository =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let transaction_service: Arc<dyn TransactionServiceTrait> =
        Arc::new(TransactionService::new(transaction_repository));

    let escrow_repository = Arc::new(EscrowRepository::new(pool.clone(), writer.clone()));
    let escrow_service: Arc<dyn EscrowServiceTrait> = Arc::new(EscrowService::new(escrow_repository));

    let profile_repository = Arc::new(ProfileRepository::new(pool.clone(), writer.clone()));
    let profile_service: Arc<dyn ProfileServiceTrait> = Arc::new(ProfileService::new(
        profile_repository,
        goal_service.clone(),
        escrow_service.clone(),
    ));

    let role_repository = Arc::new(RoleRepository::new(pool.clone(), writer.clone()));
    let role_service: Arc<dyn RoleServiceTrait> = Arc::new(RoleService::new(role_repository));
    role_service.seed_builtin_roles().await?;

    let advisor: Arc<dyn AdvisorTrait> = Arc::new(HttpAdvisor::new(
        config.ai_api_url.clone(),
        config.ai_api_key.clone(),
    ));

    Ok(Arc::new(AppState {
        profile_service,
        goal_service,
        transaction_service,
        escrow_service,
        role_service,
        advisor,
        auth: AuthManager::new(&config.jwt_secret),
        admin_email: config.admin_email.clone(),
        db_path,
    }))
}
