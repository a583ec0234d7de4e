// src/main.rs
//
// Évaluateur postfixe — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF : eframe::run_native, ou mode sans fenêtre avec --expr "..."
// - WEB (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Évaluateur postfixe";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;
    use evaluateur_postfixe::noyau::Limites;

    /// Infixe -> postfixe -> pile, avec la trace de chaque étape.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Évalue cette expression et affiche le rapport, sans ouvrir de fenêtre
        #[arg(short, long)]
        pub expr: Option<String>,

        /// Profondeur max de la pile d’opérateurs
        #[arg(long)]
        pub max_pile: Option<usize>,

        /// Nombre max de jetons postfixes
        #[arg(long)]
        pub max_sortie: Option<usize>,
    }

    impl Args {
        pub fn limites(&self) -> Limites {
            Limites::default().avec_bornes(self.max_pile, self.max_sortie)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use evaluateur_postfixe::noyau::evaluer_expression;

    // RUST_LOG=debug pour voir chaque étape de conversion / évaluation.
    env_logger::init();

    let args = cli::Args::parse();
    let limites = args.limites();

    if let Some(expr) = &args.expr {
        match evaluer_expression(expr, &limites) {
            Ok(rapport) => {
                println!("{}", rapport.rendu());
                return Ok(());
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 620.0])
            .with_min_inner_size([380.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(limites)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
