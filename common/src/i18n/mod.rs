//! Localized interface strings.
//!
//! One `UiText` table per `Locale`. The frontend reads every label from here
//! so a locale switch only needs to re-render.

use crate::model::locale::Locale;

#[derive(Debug)]
pub struct UiText {
    pub app_title: &'static str,
    pub enter_your_code: &'static str,
    pub the_code: &'static str,
    pub function: &'static str,
    pub what_happened: &'static str,
    pub tips: &'static str,
    pub try_it_yourself: &'static str,
    pub visual_result: &'static str,
    pub explain_code: &'static str,
    pub explain: &'static str,
    pub analyzing_code: &'static str,
    pub placeholder_text: &'static str,
    pub error_title: &'static str,
    pub empty_code_error: &'static str,
    pub no_code_detected: &'static str,
    pub no_visual_output_title: &'static str,
    pub no_visual_output: &'static str,
    pub preview_error: &'static str,
    pub reset_example: &'static str,
    pub modified: &'static str,
    pub new_snippet: &'static str,
    pub dismiss: &'static str,
    pub remote_skipped: &'static str,
}

static EN: UiText = UiText {
    app_title: "Visual Code Explainer",
    enter_your_code: "Enter Your Code",
    the_code: "The Code",
    function: "Function",
    what_happened: "What Happened",
    tips: "Tips",
    try_it_yourself: "Try it Yourself",
    visual_result: "Visual Result",
    explain_code: "Explain Code",
    explain: "Explain",
    analyzing_code: "Analyzing your code...",
    placeholder_text: "Paste HTML, CSS, JavaScript, JSON or API code below",
    error_title: "Error",
    empty_code_error: "Please paste some code to analyze.",
    no_code_detected: "No recognized code patterns were detected.",
    no_visual_output_title: "No Visual Output",
    no_visual_output: "This code does not produce a visual output on the page. It executes logic or stores data in memory, but does not display anything visually. To see visual results, combine it with HTML elements and DOM manipulation methods.",
    preview_error: "Error rendering code",
    reset_example: "Reset example",
    modified: "Modified",
    new_snippet: "New snippet",
    dismiss: "Close",
    remote_skipped: "This snippet was explained locally only.",
};

static ES: UiText = UiText {
    app_title: "Explicador Visual de Código",
    enter_your_code: "Ingresa Tu Código",
    the_code: "El Código",
    function: "Función",
    what_happened: "Qué Sucedió",
    tips: "Consejos",
    try_it_yourself: "Pruébalo Tú Mismo",
    visual_result: "Resultado Visual",
    explain_code: "Explicar Código",
    explain: "Explicar",
    analyzing_code: "Analizando tu código...",
    placeholder_text: "Pega código HTML, CSS, JavaScript, JSON o API aquí",
    error_title: "Error",
    empty_code_error: "Por favor, pega algo de código para analizar.",
    no_code_detected: "No se detectaron patrones de código reconocidos.",
    no_visual_output_title: "Sin Salida Visual",
    no_visual_output: "Este código no produce una salida visual en la página. Ejecuta lógica o almacena datos en memoria, pero no muestra nada visualmente. Para ver resultados visuales, combínalo con elementos HTML y métodos de manipulación del DOM.",
    preview_error: "Error al representar el código",
    reset_example: "Restablecer ejemplo",
    modified: "Modificado",
    new_snippet: "Nuevo código",
    dismiss: "Cerrar",
    remote_skipped: "Este código se explicó solo de forma local.",
};

impl Locale {
    pub fn ui(self) -> &'static UiText {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_differ_per_locale() {
        assert_ne!(Locale::En.ui().empty_code_error, Locale::Es.ui().empty_code_error);
        assert_ne!(Locale::En.ui().no_code_detected, Locale::Es.ui().no_code_detected);
    }
}
