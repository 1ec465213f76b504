use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use papertrade_core::portfolio::performance::{PerformanceService, PerformanceServiceTrait};
use papertrade_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use papertrade_core::quotes::{MarketQueryServiceTrait, QuoteProviderTrait, QuoteService};
use papertrade_core::trading::{TradingService, TradingServiceTrait};
use papertrade_core::users::{UserService, UserServiceTrait};
use papertrade_core::wallet::{WalletService, WalletServiceTrait};
use papertrade_market_data::{FmpProvider, MarketDataProvider, NullProvider};
use papertrade_storage_sqlite::db;
use papertrade_storage_sqlite::ledger::LedgerRepository;
use papertrade_storage_sqlite::snapshots::SnapshotRepository;
use papertrade_storage_sqlite::users::UserRepository;
use papertrade_storage_sqlite::wallet::CashWalletRepository;

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub auth: AuthManager,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub trading_service: Arc<dyn TradingServiceTrait>,
    pub wallet_service: Arc<dyn WalletServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub performance_service: Arc<dyn PerformanceServiceTrait>,
    pub market_service: Arc<dyn MarketQueryServiceTrait>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let ledger = Arc::new(LedgerRepository::new(pool.clone()));
    let user_repository = Arc::new(UserRepository::new(pool.clone()));
    let cash_repository = Arc::new(CashWalletRepository::new(pool.clone()));
    let snapshot_repository = Arc::new(SnapshotRepository::new(pool.clone()));

    let provider: Arc<dyn MarketDataProvider> = match &config.fmp_api_key {
        Some(key) => Arc::new(FmpProvider::new(key.clone())),
        None => {
            tracing::warn!("FMP_API_KEY not set; market data will degrade to fallbacks");
            Arc::new(NullProvider)
        }
    };
    let quote_service = Arc::new(QuoteService::new(provider));
    let quote_provider: Arc<dyn QuoteProviderTrait> = quote_service.clone();

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let trading_service = Arc::new(TradingService::new(ledger.clone()));
    let wallet_service = Arc::new(WalletService::new(ledger.clone(), cash_repository));
    let portfolio_service = Arc::new(PortfolioService::new(
        ledger.clone(),
        quote_provider.clone(),
    ));
    let performance_service = Arc::new(PerformanceService::new(
        ledger,
        quote_provider,
        snapshot_repository,
        user_repository,
    ));

    Ok(Arc::new(AppState {
        auth: AuthManager::new(&config.jwt_secret),
        user_service,
        trading_service,
        wallet_service,
        portfolio_service,
        performance_service,
        market_service: quote_service,
    }))
}
