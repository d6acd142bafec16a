//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración del servidor, del fichero de datos
//! y de los orígenes CORS permitidos.

pub mod environment;

pub use environment::*;
