use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tower_http::services::ServeDir;

use board_routing::config::environment::EnvironmentConfig;
use board_routing::middleware::cors::cors_middleware;
use board_routing::persistence::{LoadStatus, PersistenceManager};
use board_routing::routes;
use board_routing::services::asset_service::AssetManager;
use board_routing::services::board_service::BoardService;
use board_routing::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🧗 Board & Route Server");
    info!("=======================");

    let config = EnvironmentConfig::default();

    // Cargar datos persistidos (migrando el formato legacy si hace falta)
    let persistence = PersistenceManager::new(config.data_file.clone());
    let (data, status) = persistence.load();
    match status {
        LoadStatus::Loaded => {
            info!("✅ Datos cargados desde {}", config.data_file.display())
        }
        LoadStatus::Missing => {
            info!("📄 Sin datos previos, empezando con un store vacío")
        }
        LoadStatus::Migrated => {
            info!("✅ Documento legacy migrado al formato actual")
        }
        LoadStatus::Recovered => {
            error!("❌ Documento de datos ilegible: se descarta y se empieza de cero");
            match persistence.backup_unreadable() {
                Ok(backup) => {
                    warn!("💾 Copia del documento ilegible en {}", backup.display())
                }
                Err(e) => {
                    warn!("⚠️ No se pudo respaldar el documento ilegible: {}", e)
                }
            }
        }
    }

    // Asegurar el directorio de uploads
    let assets = AssetManager::new(config.uploads_dir.clone());
    assets.ensure_dir()?;

    let store = BoardService::new(data, persistence, assets);
    let app_state = AppState::new(store, config.clone());

    // Crear router de la API
    let app = Router::new()
        .merge(routes::board_routes::create_board_router())
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /api/data - Documento completo del store");
    info!("   GET    /api/current-board - Board actual y sus rutas");
    info!("   POST   /api/zones - Guardar zonas del board actual");
    info!("   POST   /api/routes - Guardar ruta");
    info!("   POST   /api/upload-image - Subir imagen y crear board");
    info!("   DELETE /api/board-image - Borrar board actual");
    info!("   DELETE /api/routes/:name - Borrar ruta");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
