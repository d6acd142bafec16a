use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use vehicle_tracker::config::environment::EnvironmentConfig;
use vehicle_tracker::create_app;
use vehicle_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Vehicle Tracker");
    info!("================================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };

    // Un fichero de datos malformado aborta el arranque
    let app_state = match AppState::load(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("❌ No se pudo leer {}: {}", config.data_file.display(), e);
            return Err(anyhow::anyhow!("Error cargando datos: {}", e));
        }
    };

    let data_file = app_state.store.path().display().to_string();
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("💾 Fichero de datos: {}", data_file);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /?search= - Dashboard de vehículos");
    info!("   GET/POST /add - Alta de vehículo");
    info!("   GET/POST /move/:reg - Mover vehículo");
    info!("   POST /delete/:reg - Eliminar vehículo");
    info!("   GET/POST /add-location - Ubicaciones");
    info!("   GET/POST /edit-location/:loc - Renombrar ubicación");
    info!("   POST /delete-location/:loc - Eliminar ubicación");
    info!("   GET  /health - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
