use crate::model::explanation::{ExplanationRecord, PatternKey};

pub(super) fn lookup(key: PatternKey) -> Option<&'static ExplanationRecord> {
    let record = match key {
        PatternKey::BackgroundColor => &BACKGROUND_COLOR,
        PatternKey::TextColor => &TEXT_COLOR,
        PatternKey::FontSize => &FONT_SIZE,
        PatternKey::TextWrap => &TEXT_WRAP,
        PatternKey::Padding => &PADDING,
        PatternKey::Margin => &MARGIN,
        PatternKey::Display => &DISPLAY,
        PatternKey::BorderRadius => &BORDER_RADIUS,
        PatternKey::Opacity => &OPACITY,
        PatternKey::Width => &WIDTH,
        PatternKey::Height => &HEIGHT,
        PatternKey::Button => &BUTTON,
        PatternKey::Div => &DIV,
        PatternKey::Paragraph => &PARAGRAPH,
        PatternKey::Heading => &HEADING,
        PatternKey::EventListener => &EVENT_LISTENER,
        PatternKey::QuerySelector => &QUERY_SELECTOR,
        PatternKey::InnerHtml => &INNER_HTML,
        PatternKey::TextContent => &TEXT_CONTENT,
        PatternKey::IfStatement => &IF_STATEMENT,
        PatternKey::Variable => &VARIABLE,
        PatternKey::JsonData => &JSON_DATA,
        PatternKey::Fetch => &FETCH,
        PatternKey::GenericStylesheet => &GENERIC_STYLESHEET,
        PatternKey::GenericMarkup => &GENERIC_MARKUP,
        PatternKey::GenericScript => &GENERIC_SCRIPT,
        PatternKey::NoPattern => return None,
    };
    Some(record)
}

static BACKGROUND_COLOR: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad background-color en CSS se utiliza para establecer el color de fondo de un elemento HTML específico. Define un color detrás del contenido, relleno y borde de un elemento. El valor predeterminado es transparente.",
    narrative: "Has aplicado un color de fondo a un elemento HTML. Este color llena toda el área de fondo de ese elemento, detrás de cualquier texto o contenido dentro de él.",
    tips: &[
        "Asegúrate de que haya suficiente contraste entre el color de fondo y el color del texto.",
        "Si usas imágenes de fondo (background-image), define un background-color como alternativa.",
        "Puedes usar nombres de colores (red, blue), códigos hexadecimales (#FF5733) o valores RGB.",
        "La propiedad background-color es heredada por elementos secundarios a menos que se anule.",
    ],
    example: "body {\n    background-color: yellow;\n}",
    produces_visible_artifact: true,
};

static TEXT_COLOR: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad color en CSS establece el color del texto de un elemento. Se aplica a todo el contenido de texto dentro del elemento y sus elementos secundarios a menos que se anule.",
    narrative: "Has cambiado el color del texto dentro del elemento HTML seleccionado. Todo el texto dentro de este elemento se mostrará ahora en el color especificado.",
    tips: &[
        "Usa nombres de colores (red, blue), códigos hexadecimales (#FF5733) o valores RGB.",
        "Asegúrate de que el color del texto tenga suficiente contraste con el fondo.",
        "La propiedad color es heredada por elementos secundarios.",
        "Usa el color para resaltar texto importante o crear jerarquía visual.",
    ],
    example: "body {\n    color: red;\n}",
    produces_visible_artifact: true,
};

static FONT_SIZE: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad font-size en CSS controla el tamaño del texto. Se puede especificar en píxeles (px), unidades em, porcentajes (%) u otras unidades CSS.",
    narrative: "Has cambiado el tamaño del texto en el elemento seleccionado. El texto ahora se mostrará en el tamaño especificado.",
    tips: &[
        "Usa px para tamaños fijos, em para tamaños relativos, o porcentajes para tamaño responsivo.",
        "Un buen tamaño de fuente base para el texto del cuerpo es típicamente 16px.",
        "Los tamaños de fuente más grandes mejoran la legibilidad pero pueden ocupar más espacio.",
        "Considera usar unidades relativas (em o %) para mejor accesibilidad.",
    ],
    example: "h1 {\n    font-size: 32px;\n    font-weight: bold;\n}",
    produces_visible_artifact: true,
};

static TEXT_WRAP: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad text-wrap en CSS controla cómo se ajusta el texto dentro de su contenedor. Determina si el texto debe romper a la siguiente línea o mantenerse en una sola línea.",
    narrative: "Has establecido cómo debe ajustarse el texto dentro de su contenedor. Esto afecta cómo se manejan las líneas largas de texto cuando exceden el ancho de su contenedor.",
    tips: &[
        "text-wrap: wrap - El texto se divide en múltiples líneas (comportamiento predeterminado).",
        "text-wrap: nowrap - El texto permanece en una línea y puede desbordarse.",
        "text-wrap: balance - Distribuye el texto uniformemente entre líneas (mejor para encabezados).",
        "Usa la propiedad white-space junto con text-wrap para más control.",
    ],
    example: "p {\n    text-wrap: wrap;\n    width: 300px;\n}",
    produces_visible_artifact: true,
};

static PADDING: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad padding en CSS crea espacio dentro de un elemento, entre el contenido y el borde. Añade espaciado interno para empujar el contenido lejos de los bordes del elemento.",
    narrative: "Has añadido espaciado interno a un elemento. Esto crea espacio entre el contenido y el borde del elemento.",
    tips: &[
        "padding: 10px - Todos los lados obtienen 10px de relleno.",
        "padding: 10px 20px - Arriba/abajo 10px, izquierda/derecha 20px.",
        "padding: 10px 20px 15px 5px - Arriba, derecha, abajo, izquierda.",
        "El relleno está dentro del elemento; el margen está fuera.",
    ],
    example: "div {\n    padding: 20px;\n    background-color: #e8f4f8;\n    border: 1px solid #3498db;\n}",
    produces_visible_artifact: true,
};

static MARGIN: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad margin en CSS crea espacio fuera de un elemento, alrededor de su borde. Añade espaciado externo entre el elemento y otros elementos o el borde de la página.",
    narrative: "Has añadido espaciado externo alrededor de un elemento. Esto crea distancia entre este elemento y otros elementos de la página.",
    tips: &[
        "margin: 10px - Todos los lados obtienen 10px de margen.",
        "margin: 10px 20px - Arriba/abajo 10px, izquierda/derecha 20px.",
        "margin: auto - Centra el elemento horizontalmente.",
        "El margen puede ser negativo para superponer elementos.",
    ],
    example: "div {\n    margin: 20px;\n    padding: 20px;\n    background-color: #f0f0f0;\n    border: 2px solid #333;\n}",
    produces_visible_artifact: true,
};

static DISPLAY: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad display en CSS controla cómo se representa un elemento en la página. Los valores comunes son block, inline, inline-block, flex, grid y none.",
    narrative: "Has cambiado cómo se muestra este elemento y se posiciona en relación con otros elementos de la página.",
    tips: &[
        "display: block - El elemento ocupa el ancho completo, comienza en una nueva línea.",
        "display: inline - El elemento solo ocupa el ancho necesario, fluye con el texto.",
        "display: inline-block - Se comporta como inline pero respeta ancho/alto.",
        "display: flex - Crea un contenedor de diseño flexible.",
        "display: grid - Crea un contenedor de diseño de cuadrícula.",
        "display: none - Oculta el elemento por completo.",
    ],
    example: "div {\n    display: flex;\n    justify-content: center;\n    align-items: center;\n    height: 200px;\n}",
    produces_visible_artifact: true,
};

static BORDER_RADIUS: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad border-radius en CSS redondea las esquinas del borde de un elemento. Puede crear esquinas ligeramente redondeadas o formas completamente circulares dependiendo de los valores utilizados.",
    narrative: "Has redondeado las esquinas de un elemento. Esto crea una apariencia más suave y moderna en comparación con las esquinas afiladas.",
    tips: &[
        "border-radius: 8px - Todas las esquinas redondeadas por igual.",
        "border-radius: 50% - Crea un círculo perfecto (si el elemento es cuadrado).",
        "border-radius: 10px 20px 30px 40px - Radio diferente para cada esquina.",
        "Usa con background-color o border para mejor efecto.",
    ],
    example: "div {\n    border-radius: 12px;\n    padding: 20px;\n    background-color: #9b59b6;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static OPACITY: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad opacity en CSS controla la transparencia de un elemento. Los valores van de 0 (completamente transparente/invisible) a 1 (completamente opaco/visible).",
    narrative: "Has cambiado la transparencia de un elemento. El elemento ahora es más transparente o más sólido dependiendo del valor de opacidad.",
    tips: &[
        "opacity: 0 - El elemento es invisible pero aún ocupa espacio.",
        "opacity: 0.5 - El elemento es 50% transparente.",
        "opacity: 1 - El elemento es completamente opaco (predeterminado).",
        "La opacidad afecta al elemento completo y a todos sus hijos.",
    ],
    example: "div {\n    opacity: 0.7;\n    padding: 20px;\n    background-color: #e74c3c;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static WIDTH: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad width en CSS establece el ancho de un elemento. Se puede especificar en píxeles (px), porcentajes (%), unidades em u otras unidades CSS.",
    narrative: "Has establecido el ancho de un elemento. El elemento se mostrará ahora con el ancho especificado.",
    tips: &[
        "width: 300px - Ancho fijo de 300 píxeles.",
        "width: 50% - La mitad del ancho del contenedor padre.",
        "width: auto - El navegador calcula el ancho automáticamente.",
        "max-width y min-width se pueden usar para establecer límites.",
    ],
    example: "div {\n    width: 80%;\n    padding: 20px;\n    background-color: #2ecc71;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static HEIGHT: ExplanationRecord = ExplanationRecord {
    summary: "La propiedad height en CSS establece la altura de un elemento. Se puede especificar en píxeles (px), porcentajes (%), unidades em u otras unidades CSS.",
    narrative: "Has establecido la altura de un elemento. El elemento se mostrará ahora con la altura especificada.",
    tips: &[
        "height: 200px - Altura fija de 200 píxeles.",
        "height: 50vh - La mitad de la altura de la ventana gráfica.",
        "height: auto - El navegador calcula la altura basada en el contenido.",
        "min-height y max-height se pueden usar para establecer límites.",
    ],
    example: "div {\n    height: 150px;\n    padding: 20px;\n    background-color: #f39c12;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static BUTTON: ExplanationRecord = ExplanationRecord {
    summary: "El elemento <button> crea un botón interactivo con el que los usuarios pueden interactuar. Por defecto, los botones se utilizan para enviar formularios o activar acciones de JavaScript.",
    narrative: "Has creado un botón interactivo. Los usuarios pueden hacer clic en él para activar una acción o enviar un formulario.",
    tips: &[
        "Siempre proporciona texto descriptivo dentro del botón para indicar a los usuarios qué hace.",
        r#"Usa el atributo "type" para especificar el comportamiento del botón: type="button", type="submit" o type="reset"."#,
        "Personaliza los botones con CSS para que coincidan con tu diseño.",
        "Asegúrate de que los botones sean fáciles de hacer clic en dispositivos móviles.",
    ],
    example: "<button>Click Me</button>",
    produces_visible_artifact: true,
};

static DIV: ExplanationRecord = ExplanationRecord {
    summary: "El elemento <div> es un contenedor utilizado para agrupar otros elementos HTML. No tiene un significado semántico especial y se utiliza para propósitos de diseño y estilo.",
    narrative: "Has creado un elemento contenedor que puede contener otro contenido. Puedes estilizarlo con CSS y organizar el diseño de tu página con divs.",
    tips: &[
        "Usa <div> para agrupar contenido genérico.",
        "Para contenido semántico, considera usar <section>, <article> o <nav> en su lugar.",
        "Los divs son elementos a nivel de bloque por defecto, ocupando ancho completo.",
        "Puedes anidar divs dentro de otros divs para diseños complejos.",
    ],
    example: r#"<div style="background-color: #ecf0f1; padding: 20px; border-radius: 8px;">
    <p>Este es contenido dentro de un div</p>
</div>"#,
    produces_visible_artifact: true,
};

static PARAGRAPH: ExplanationRecord = ExplanationRecord {
    summary: "El elemento <p> define un párrafo de texto. Se utiliza para agrupar oraciones relacionadas y es uno de los elementos HTML más básicos.",
    narrative: "Has creado un elemento de párrafo. El texto dentro de este elemento se mostrará como un bloque de texto con márgenes arriba y abajo.",
    tips: &[
        "Usa <p> para contenido de texto regular.",
        "Cada <p> crea un nuevo párrafo con espaciado.",
        "Los párrafos deben contener pensamientos u oraciones completas.",
        "Estiliza párrafos con CSS para una apariencia de texto consistente.",
    ],
    example: "<p>Este es un párrafo de texto que puedes estilizar y modificar.</p>",
    produces_visible_artifact: true,
};

static HEADING: ExplanationRecord = ExplanationRecord {
    summary: "Los elementos de encabezado HTML (<h1> a <h6>) se utilizan para definir encabezados y subencabezados en una página. <h1> es el más grande e importante, mientras que <h6> es el más pequeño.",
    narrative: "Has creado un elemento de encabezado. Este texto se mostrará como un encabezado con texto más grande y estilo en negrita por defecto.",
    tips: &[
        "Usa solo un <h1> por página para el título principal.",
        "Usa encabezados en una jerarquía lógica (h1, luego h2, luego h3, etc.).",
        "Los encabezados mejoran el SEO y la accesibilidad.",
        "No saltes niveles de encabezado (por ejemplo, no vayas de h1 directamente a h3).",
    ],
    example: "<h1>Main Heading</h1>",
    produces_visible_artifact: true,
};

static EVENT_LISTENER: ExplanationRecord = ExplanationRecord {
    summary: "addEventListener() es un método de JavaScript que adjunta un controlador de eventos a un elemento. Escucha eventos específicos (como clics, escritura, etc.) y ejecuta código cuando ocurre el evento.",
    narrative: "Has configurado un oyente que vigila un evento en un elemento. Cuando ocurra el evento, se ejecutará el código dentro de la función.",
    tips: &[
        "Los eventos comunes incluyen: click, mouseover, keydown, submit, change, input.",
        "Puedes adjuntar múltiples oyentes al mismo elemento.",
        "El parámetro event te da información sobre qué sucedió.",
        "Usa removeEventListener() para dejar de escuchar un evento.",
    ],
    example: "const button = document.querySelector('button');\nbutton.addEventListener('click', function() {\n    alert('¡Hiciste clic en el botón!');\n});",
    produces_visible_artifact: false,
};

static QUERY_SELECTOR: ExplanationRecord = ExplanationRecord {
    summary: "document.querySelector() es un método de JavaScript que encuentra y devuelve el primer elemento en el DOM que coincide con un selector CSS especificado.",
    narrative: "Has seleccionado un elemento HTML de la página usando un selector CSS. Este elemento ahora se almacena en una variable para que puedas manipularlo.",
    tips: &[
        "Usa selectores CSS: .class, #id, tag, [attribute], etc.",
        "querySelector() devuelve solo el primer elemento coincidente.",
        "Usa querySelectorAll() para obtener todos los elementos coincidentes.",
        "Almacena el resultado en una variable para reutilizarlo varias veces.",
    ],
    example: "const heading = document.querySelector('h1');\nheading.textContent = 'Nuevo texto de encabezado';",
    produces_visible_artifact: false,
};

static INNER_HTML: ExplanationRecord = ExplanationRecord {
    summary: "innerHTML es una propiedad de JavaScript que obtiene o establece el contenido HTML dentro de un elemento. Te permite agregar, eliminar o cambiar elementos HTML dinámicamente.",
    narrative: "Has cambiado el contenido HTML dentro de un elemento. El nuevo contenido reemplaza lo que estaba allí antes.",
    tips: &[
        "innerHTML analiza cadenas HTML, así que puedes agregar contenido complejo.",
        "Usa textContent para texto plano sin análisis HTML (más seguro).",
        "Ten cuidado con la entrada del usuario al usar innerHTML (riesgo de seguridad).",
        "innerHTML sobrescribe todo el contenido existente dentro del elemento.",
    ],
    example: "const div = document.querySelector('div');\ndiv.innerHTML = '<p>Este es el <strong>nuevo contenido</strong></p>';",
    produces_visible_artifact: false,
};

static TEXT_CONTENT: ExplanationRecord = ExplanationRecord {
    summary: "textContent es una propiedad de JavaScript que obtiene o establece el contenido de texto de un elemento. A diferencia de innerHTML, trata la entrada como texto plano, no HTML.",
    narrative: "Has cambiado el contenido de texto dentro de un elemento. El nuevo texto reemplaza lo que estaba allí antes.",
    tips: &[
        "textContent es más seguro que innerHTML cuando se trata de entrada del usuario.",
        "textContent ignora etiquetas HTML y las muestra como texto plano.",
        "El rendimiento es ligeramente mejor con textContent que con innerHTML.",
        "Usa textContent para mostrar texto plano.",
    ],
    example: "const paragraph = document.querySelector('p');\nparagraph.textContent = 'Este es nuevo contenido de texto';",
    produces_visible_artifact: false,
};

static IF_STATEMENT: ExplanationRecord = ExplanationRecord {
    summary: "Una sentencia if en JavaScript verifica si una condición es verdadera y, si es así, ejecuta un bloque de código. También puedes usar else o else if para condiciones adicionales.",
    narrative: "Has creado lógica condicional que toma decisiones basadas en si las condiciones son verdaderas o falsas. Diferentes códigos se ejecutan dependiendo del resultado.",
    tips: &[
        "Usa === para comparación de igualdad estricta (recomendado).",
        "Usa && para AND, || para OR, ! para NOT.",
        "Siempre usa llaves {} incluso para bloques de una sola declaración.",
        "Las condiciones pueden verificar valores, funciones o lógica compleja.",
    ],
    example: "const age = 18;\nif (age >= 18) {\n    console.log('Eres mayor de edad');\n} else {\n    console.log('Eres menor de edad');\n}",
    produces_visible_artifact: false,
};

static VARIABLE: ExplanationRecord = ExplanationRecord {
    summary: "Las variables en JavaScript almacenan valores de datos. Puedes declarar variables usando const, let o var. const y let son preferidas en JavaScript moderno.",
    narrative: "Has creado una variable que almacena un valor. Ahora puedes usar esta variable en todo tu código para acceder o modificar el valor almacenado.",
    tips: &[
        "Usa const por defecto para variables que no cambian.",
        "Usa let para variables que necesitan cambiar.",
        "Evita var en JavaScript moderno; usa const o let en su lugar.",
        "Los nombres de variables deben ser descriptivos y usar camelCase.",
    ],
    example: "const name = 'Juan';\nconst age = 30;\nconsole.log(name, age);",
    produces_visible_artifact: false,
};

static JSON_DATA: ExplanationRecord = ExplanationRecord {
    summary: "JSON (Notación de Objetos de JavaScript) es un formato para almacenar e intercambiar datos. Utiliza pares clave-valor encerrados en llaves y matrices encerradas en corchetes.",
    narrative: "Has creado una estructura JSON para organizar y almacenar datos. Estos datos se pueden leer, modificar y enviar fácilmente entre diferentes sistemas.",
    tips: &[
        "Las claves JSON deben ser cadenas encerradas entre comillas dobles.",
        "Los valores pueden ser: cadenas, números, booleanos, null, objetos o matrices.",
        "JSON es independiente del lenguaje y se usa ampliamente en APIs web.",
        "Usa JSON.parse() para convertir cadenas JSON a objetos de JavaScript.",
    ],
    example: r#"{
  "nombre": "Juan",
  "edad": 30,
  "ciudad": "Nueva York"
}"#,
    produces_visible_artifact: false,
};

static FETCH: ExplanationRecord = ExplanationRecord {
    summary: "La API fetch() es un método de JavaScript para realizar solicitudes HTTP para recuperar datos de un servidor o API. Devuelve una Promesa que se resuelve con la respuesta.",
    narrative: "Has iniciado una solicitud para obtener datos de un servidor. Una vez que llegan los datos, puedes procesarlos y usarlos en tu aplicación.",
    tips: &[
        "fetch() devuelve una Promesa, usa .then() o async/await para manejar la respuesta.",
        "Siempre verifica el estado de la respuesta (.ok) antes de usar los datos.",
        "Convierte la respuesta a JSON usando el método .json().",
        "Maneja errores con .catch() para gestionar solicitudes fallidas correctamente.",
    ],
    example: "fetch('https://api.example.com/data')\n  .then(response => response.json())\n  .then(data => console.log(data))\n  .catch(error => console.log('Error:', error));",
    produces_visible_artifact: false,
};

static GENERIC_STYLESHEET: ExplanationRecord = ExplanationRecord {
    summary: "Este es código CSS que estiliza elementos HTML. CSS (Hojas de Estilo en Cascada) controla la apariencia de páginas web, incluyendo colores, fuentes, espaciado y diseño.",
    narrative: "Has escrito CSS para estilizar elementos en tu página. Estos estilos afectarán la apariencia visual de los elementos HTML seleccionados.",
    tips: &[
        "CSS usa selectores para dirigirse a elementos HTML.",
        "Las propiedades están separadas de los valores por dos puntos (:).",
        "Múltiples propiedades están separadas por punto y coma (;).",
        "Los estilos se aplican en cascada - los selectores más específicos anulan los generales.",
    ],
    example: "body {\n    background-color: #ecf0f1;\n    color: #333;\n}",
    produces_visible_artifact: true,
};

static GENERIC_MARKUP: ExplanationRecord = ExplanationRecord {
    summary: "Este es código HTML (Lenguaje de Marcas de Hipertexto) que define la estructura y contenido de una página web. Los elementos HTML son los bloques de construcción de todos los sitios web.",
    narrative: "Has creado estructura HTML. Esto formará la base de tu página web, conteniendo texto, botones, imágenes y otro contenido.",
    tips: &[
        "HTML usa etiquetas encerradas en paréntesis angulares < >.",
        "La mayoría de las etiquetas vienen en parejas: etiqueta de apertura y etiqueta de cierre.",
        "HTML proporciona significado semántico al contenido web.",
        "Combina HTML con CSS para estilizar y JavaScript para interactividad.",
    ],
    example: "<div>\n    <h1>Title</h1>\n    <p>Content goes here</p>\n</div>",
    produces_visible_artifact: true,
};

static GENERIC_SCRIPT: ExplanationRecord = ExplanationRecord {
    summary: "Este es código JavaScript que agrega interactividad y comportamiento dinámico a páginas web. JavaScript se ejecuta en el navegador y puede responder a acciones del usuario y modificar HTML.",
    narrative: "Has escrito código JavaScript que agrega funcionalidad a tu página web. Este código puede manejar interacciones del usuario y manipular contenido de página.",
    tips: &[
        "JavaScript se ejecuta en el navegador en la computadora del usuario.",
        "JavaScript puede responder a eventos del usuario como clics y escritura.",
        "JavaScript puede modificar HTML y CSS dinámicamente.",
        "Siempre maneja errores correctamente en tu código JavaScript.",
    ],
    example: "console.log('Hello World');",
    produces_visible_artifact: false,
};
