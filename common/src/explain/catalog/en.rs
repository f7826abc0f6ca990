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

// Stylesheet properties

static BACKGROUND_COLOR: ExplanationRecord = ExplanationRecord {
    summary: "The background-color property in CSS is used to set the background color of a specific HTML element. It defines a color behind the content, padding, and border of an element. The default value is transparent, which allows you to see the background of the underlying element or page.",
    narrative: "You've applied a background color to an HTML element. This color fills the entire background area of that element, behind any text or content inside it.",
    tips: &[
        "Ensure sufficient contrast between the background-color and the text color to ensure accessibility.",
        "If you use background images (background-image), define a background-color as a fallback in case the image does not load.",
        "You can use color names (red, blue), hex codes (#FF5733), or RGB values (rgb(255, 87, 51)).",
        "The background-color property is inherited by child elements unless overridden.",
    ],
    example: "body {\n    background-color: yellow;\n}",
    produces_visible_artifact: true,
};

static TEXT_COLOR: ExplanationRecord = ExplanationRecord {
    summary: "The color property in CSS sets the text color of an element. It applies to all text content within the element and its children unless overridden. This is one of the most commonly used CSS properties for styling text.",
    narrative: "You've changed the color of the text within the selected HTML element. All text inside this element will now display in the specified color.",
    tips: &[
        "Use color names (red, blue), hex codes (#FF5733), or RGB values (rgb(255, 87, 51)).",
        "Ensure the text color has enough contrast with the background for readability.",
        "The color property is inherited by child elements.",
        "Use color to highlight important text or create visual hierarchy.",
    ],
    example: "body {\n    color: red;\n}",
    produces_visible_artifact: true,
};

static FONT_SIZE: ExplanationRecord = ExplanationRecord {
    summary: "The font-size property in CSS controls the size of text. It can be specified in pixels (px), em units (em), percentages (%), or other CSS units. This property is essential for creating readable and visually appealing text.",
    narrative: "You've changed the size of text in the selected element. The text will now be displayed in the specified size.",
    tips: &[
        "Use px for fixed sizes, em for relative sizes, or percentages for responsive sizing.",
        "A good base font size for body text is typically 16px.",
        "Larger font sizes improve readability but may take up more space.",
        "Consider using relative units (em or %) for better accessibility.",
    ],
    example: "h1 {\n    font-size: 32px;\n    font-weight: bold;\n}",
    produces_visible_artifact: true,
};

static TEXT_WRAP: ExplanationRecord = ExplanationRecord {
    summary: "The text-wrap property in CSS controls how text wraps within its container. It determines whether text should break to the next line or be kept on a single line. This is useful for controlling the layout of long text content.",
    narrative: "You've set how text should wrap within its container. This affects how long lines of text are handled when they exceed the width of their container.",
    tips: &[
        "text-wrap: wrap - Text breaks into multiple lines (default behavior).",
        "text-wrap: nowrap - Text stays on one line and may overflow.",
        "text-wrap: balance - Distributes text evenly across lines (better for headings).",
        "Use white-space property together with text-wrap for more control.",
    ],
    example: "p {\n    text-wrap: wrap;\n    width: 300px;\n}",
    produces_visible_artifact: true,
};

static PADDING: ExplanationRecord = ExplanationRecord {
    summary: "The padding property in CSS creates space inside an element, between the content and the border. It adds internal spacing to push content away from the edges of the element.",
    narrative: "You've added internal spacing to an element. This creates space between the content and the element's border or edge.",
    tips: &[
        "padding: 10px - All sides get 10px padding.",
        "padding: 10px 20px - Top/bottom 10px, left/right 20px.",
        "padding: 10px 20px 15px 5px - Top, right, bottom, left.",
        "Padding is inside the element; margin is outside.",
    ],
    example: "div {\n    padding: 20px;\n    background-color: #e8f4f8;\n    border: 1px solid #3498db;\n}",
    produces_visible_artifact: true,
};

static MARGIN: ExplanationRecord = ExplanationRecord {
    summary: "The margin property in CSS creates space outside an element, around its border. It adds external spacing between the element and other elements or the page edge.",
    narrative: "You've added external spacing around an element. This creates distance between this element and other elements on the page.",
    tips: &[
        "margin: 10px - All sides get 10px margin.",
        "margin: 10px 20px - Top/bottom 10px, left/right 20px.",
        "margin: auto - Centers the element horizontally.",
        "Margin can be negative to overlap elements.",
    ],
    example: "div {\n    margin: 20px;\n    padding: 20px;\n    background-color: #f0f0f0;\n    border: 2px solid #333;\n}",
    produces_visible_artifact: true,
};

static DISPLAY: ExplanationRecord = ExplanationRecord {
    summary: "The display property in CSS controls how an element is rendered on the page. Common values are block, inline, inline-block, flex, grid, and none. This is one of the most important CSS properties.",
    narrative: "You've changed how this element is displayed and positioned relative to other elements on the page.",
    tips: &[
        "display: block - Element takes full width, starts on new line.",
        "display: inline - Element only takes needed width, flows with text.",
        "display: inline-block - Behaves like inline but respects width/height.",
        "display: flex - Creates flexible layout container.",
        "display: grid - Creates grid layout container.",
        "display: none - Hides element completely.",
    ],
    example: "div {\n    display: flex;\n    justify-content: center;\n    align-items: center;\n    height: 200px;\n}",
    produces_visible_artifact: true,
};

static BORDER_RADIUS: ExplanationRecord = ExplanationRecord {
    summary: "The border-radius property in CSS rounds the corners of an element's border. It can create slightly rounded corners or fully circular shapes depending on the values used.",
    narrative: "You've rounded the corners of an element. This creates a softer, more modern appearance compared to sharp corners.",
    tips: &[
        "border-radius: 8px - All corners rounded equally.",
        "border-radius: 50% - Creates a perfect circle (if element is square).",
        "border-radius: 10px 20px 30px 40px - Different radius for each corner.",
        "Use with background-color or border for best effect.",
    ],
    example: "div {\n    border-radius: 12px;\n    padding: 20px;\n    background-color: #9b59b6;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static OPACITY: ExplanationRecord = ExplanationRecord {
    summary: "The opacity property in CSS controls the transparency of an element. Values range from 0 (completely transparent/invisible) to 1 (completely opaque/visible).",
    narrative: "You've changed the transparency of an element. The element is now either more see-through or more solid depending on the opacity value.",
    tips: &[
        "opacity: 0 - Element is invisible but still takes up space.",
        "opacity: 0.5 - Element is 50% transparent.",
        "opacity: 1 - Element is fully opaque (default).",
        "Opacity affects the entire element and all its children.",
    ],
    example: "div {\n    opacity: 0.7;\n    padding: 20px;\n    background-color: #e74c3c;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static WIDTH: ExplanationRecord = ExplanationRecord {
    summary: "The width property in CSS sets the width of an element. It can be specified in pixels (px), percentages (%), em units, or other CSS units.",
    narrative: "You've set the width of an element. The element will now be displayed with the specified width.",
    tips: &[
        "width: 300px - Fixed width of 300 pixels.",
        "width: 50% - Half the width of the parent container.",
        "width: auto - Browser calculates the width automatically.",
        "max-width and min-width can be used to set limits.",
    ],
    example: "div {\n    width: 80%;\n    padding: 20px;\n    background-color: #2ecc71;\n    color: white;\n}",
    produces_visible_artifact: true,
};

static HEIGHT: ExplanationRecord = ExplanationRecord {
    summary: "The height property in CSS sets the height of an element. It can be specified in pixels (px), percentages (%), em units, or other CSS units.",
    narrative: "You've set the height of an element. The element will now be displayed with the specified height.",
    tips: &[
        "height: 200px - Fixed height of 200 pixels.",
        "height: 50vh - Half the viewport height.",
        "height: auto - Browser calculates the height based on content.",
        "min-height and max-height can be used to set limits.",
    ],
    example: "div {\n    height: 150px;\n    padding: 20px;\n    background-color: #f39c12;\n    color: white;\n}",
    produces_visible_artifact: true,
};

// Markup elements

static BUTTON: ExplanationRecord = ExplanationRecord {
    summary: "The <button> element creates a clickable button that users can interact with. By default, buttons are used to submit forms or trigger JavaScript actions. Buttons are accessible and keyboard-friendly by default.",
    narrative: "You've created an interactive button. Users can click it to trigger an action or submit a form. The button is ready for JavaScript event handlers.",
    tips: &[
        "Always provide descriptive text inside the button to tell users what it does.",
        r#"Use the "type" attribute to specify button behavior: type="button", type="submit", or type="reset"."#,
        "Style buttons with CSS to match your design.",
        "Make sure buttons are easily clickable on mobile devices.",
    ],
    example: "<button>Click Me</button>",
    produces_visible_artifact: true,
};

static DIV: ExplanationRecord = ExplanationRecord {
    summary: "The <div> element is a container used to group other HTML elements. It has no special semantic meaning and is used for layout and styling purposes. Divs are one of the most commonly used elements in web development.",
    narrative: "You've created a container element that can hold other content. You can style it with CSS and organize your page layout with divs.",
    tips: &[
        "Use <div> for generic grouping of content.",
        "For semantic content, consider using <section>, <article>, or <nav> instead.",
        "Divs are block-level elements by default, taking full width.",
        "You can nest divs inside other divs for complex layouts.",
    ],
    example: r#"<div style="background-color: #ecf0f1; padding: 20px; border-radius: 8px;">
    <p>This is content inside a div</p>
</div>"#,
    produces_visible_artifact: true,
};

static PARAGRAPH: ExplanationRecord = ExplanationRecord {
    summary: "The <p> element defines a paragraph of text. It is used to group related sentences and is one of the most basic HTML elements. Browsers automatically add margin around paragraphs.",
    narrative: "You've created a paragraph element. Text inside this element will be displayed as a block of text with margins above and below it.",
    tips: &[
        "Use <p> for regular text content.",
        "Each <p> creates a new paragraph with spacing.",
        "Paragraphs should contain complete thoughts or sentences.",
        "Style paragraphs with CSS for consistent text appearance.",
    ],
    example: "<p>This is a paragraph of text that you can style and modify.</p>",
    produces_visible_artifact: true,
};

static HEADING: ExplanationRecord = ExplanationRecord {
    summary: "HTML heading elements (<h1> through <h6>) are used to define headings and subheadings on a page. <h1> is the largest and most important, while <h6> is the smallest. Headings help structure content and improve accessibility.",
    narrative: "You've created a heading element. This text will be displayed as a heading with larger text and bold styling by default.",
    tips: &[
        "Use only one <h1> per page for the main title.",
        "Use headings in a logical hierarchy (h1, then h2, then h3, etc.).",
        "Headings improve SEO and accessibility.",
        "Don't skip heading levels (e.g., don't go from h1 directly to h3).",
    ],
    example: "<h1>Main Heading</h1>",
    produces_visible_artifact: true,
};

// Script constructs

static EVENT_LISTENER: ExplanationRecord = ExplanationRecord {
    summary: "addEventListener() is a JavaScript method that attaches an event handler to an element. It listens for specific events (like clicks, typing, etc.) and executes code when the event occurs. This is the modern way to handle events in JavaScript.",
    narrative: "You've set up a listener that watches for an event on an element. When the event happens, the code inside the function will run.",
    tips: &[
        "Common events include: click, mouseover, keydown, submit, change, input.",
        "You can attach multiple listeners to the same element.",
        "The event parameter gives you information about what happened.",
        "Use removeEventListener() to stop listening for an event.",
    ],
    example: "const button = document.querySelector('button');\nbutton.addEventListener('click', function() {\n    alert('You clicked the button!');\n});",
    produces_visible_artifact: false,
};

static QUERY_SELECTOR: ExplanationRecord = ExplanationRecord {
    summary: "document.querySelector() is a JavaScript method that finds and returns the first element in the DOM that matches a specified CSS selector. This is a powerful way to select elements from your HTML page.",
    narrative: "You've selected an HTML element from the page using a CSS selector. This element is now stored in a variable so you can manipulate it.",
    tips: &[
        "Use CSS selectors: .class, #id, tag, [attribute], etc.",
        "querySelector() returns only the first matching element.",
        "Use querySelectorAll() to get all matching elements.",
        "Store the result in a variable to reuse it multiple times.",
    ],
    example: "const heading = document.querySelector('h1');\nheading.textContent = 'New heading text';",
    produces_visible_artifact: false,
};

static INNER_HTML: ExplanationRecord = ExplanationRecord {
    summary: "innerHTML is a JavaScript property that gets or sets the HTML content inside an element. It allows you to add, remove, or change HTML elements dynamically. This is powerful but must be used carefully for security.",
    narrative: "You've changed the HTML content inside an element. The new content replaces what was there before.",
    tips: &[
        "innerHTML parses HTML strings, so you can add complex content.",
        "Use textContent for plain text without HTML parsing (more secure).",
        "Be careful with user input when using innerHTML (security risk).",
        "innerHTML overwrites all existing content inside the element.",
    ],
    example: "const div = document.querySelector('div');\ndiv.innerHTML = '<p>This is <strong>new content</strong></p>';",
    produces_visible_artifact: false,
};

static TEXT_CONTENT: ExplanationRecord = ExplanationRecord {
    summary: "textContent is a JavaScript property that gets or sets the text content of an element. Unlike innerHTML, it treats the input as plain text, not HTML. This makes it safer for user input.",
    narrative: "You've changed the text content inside an element. The new text replaces what was there before.",
    tips: &[
        "textContent is safer than innerHTML when dealing with user input.",
        "textContent ignores HTML tags and displays them as plain text.",
        "Performance is slightly better with textContent than innerHTML.",
        "Use textContent for displaying plain text.",
    ],
    example: "const paragraph = document.querySelector('p');\nparagraph.textContent = 'This is new text content';",
    produces_visible_artifact: false,
};

static IF_STATEMENT: ExplanationRecord = ExplanationRecord {
    summary: "An if statement in JavaScript checks if a condition is true, and if so, executes a block of code. You can also use else or else if for additional conditions. This is fundamental to controlling program flow.",
    narrative: "You've created conditional logic that makes decisions based on whether conditions are true or false. Different code runs depending on the outcome.",
    tips: &[
        "Use === for strict equality comparison (recommended).",
        "Use && for AND, || for OR, ! for NOT.",
        "Always use curly braces {} even for single-statement blocks.",
        "Conditions can check values, functions, or complex logic.",
    ],
    example: "const age = 18;\nif (age >= 18) {\n    console.log('You are an adult');\n} else {\n    console.log('You are a minor');\n}",
    produces_visible_artifact: false,
};

static VARIABLE: ExplanationRecord = ExplanationRecord {
    summary: "Variables in JavaScript store data values. You can declare variables using const, let, or var. const and let are preferred in modern JavaScript. Variables can hold strings, numbers, objects, arrays, and more.",
    narrative: "You've created a variable that stores a value. You can now use this variable throughout your code to access or modify the stored value.",
    tips: &[
        "Use const by default for variables that don't change.",
        "Use let for variables that need to change.",
        "Avoid var in modern JavaScript; use const or let instead.",
        "Variable names should be descriptive and use camelCase.",
    ],
    example: "const name = 'John';\nconst age = 30;\nconsole.log(name, age);",
    produces_visible_artifact: false,
};

// Data and network

static JSON_DATA: ExplanationRecord = ExplanationRecord {
    summary: "JSON (JavaScript Object Notation) is a format for storing and exchanging data. It uses key-value pairs enclosed in curly braces and arrays enclosed in square brackets. JSON is language-independent and widely used in web APIs.",
    narrative: "You've created a JSON structure to organize and store data. This data can be easily read, modified, and sent between different systems.",
    tips: &[
        "JSON keys must be strings enclosed in double quotes.",
        "Values can be: strings, numbers, booleans, null, objects, or arrays.",
        "JSON is language-independent and widely used in web APIs.",
        "Use JSON.parse() to convert JSON strings to JavaScript objects.",
    ],
    example: r#"{
  "name": "John",
  "age": 30,
  "city": "New York"
}"#,
    produces_visible_artifact: false,
};

static FETCH: ExplanationRecord = ExplanationRecord {
    summary: "The fetch() API is a JavaScript method for making HTTP requests to retrieve data from a server or API. It returns a Promise that resolves with the response. This is the modern way to make HTTP requests in JavaScript.",
    narrative: "You've initiated a request to fetch data from a server. Once the data arrives, you can process it and use it in your application.",
    tips: &[
        "fetch() returns a Promise, use .then() or async/await to handle the response.",
        "Always check the response status (.ok) before using the data.",
        "Convert the response to JSON using .json() method.",
        "Handle errors with .catch() to manage failed requests gracefully.",
    ],
    example: "fetch('https://api.example.com/data')\n  .then(response => response.json())\n  .then(data => console.log(data))\n  .catch(error => console.log('Error:', error));",
    produces_visible_artifact: false,
};

// Category fallbacks

static GENERIC_STYLESHEET: ExplanationRecord = ExplanationRecord {
    summary: "This is CSS code that styles HTML elements. CSS (Cascading Style Sheets) controls the appearance of web pages, including colors, fonts, spacing, and layout.",
    narrative: "You've written CSS to style elements on your page. These styles will affect how the selected HTML elements appear visually.",
    tips: &[
        "CSS uses selectors to target HTML elements.",
        "Properties are separated from values by a colon (:).",
        "Multiple properties are separated by semicolons (;).",
        "Styles cascade - more specific selectors override general ones.",
    ],
    example: "body {\n    background-color: #ecf0f1;\n    color: #333;\n}",
    produces_visible_artifact: true,
};

static GENERIC_MARKUP: ExplanationRecord = ExplanationRecord {
    summary: "This is HTML (Hypertext Markup Language) code that defines the structure and content of a web page. HTML elements are the building blocks of all websites.",
    narrative: "You've created HTML structure. This will form the foundation of your web page, containing text, buttons, images, and other content.",
    tips: &[
        "HTML uses tags enclosed in angle brackets < >.",
        "Most tags come in pairs: opening tag and closing tag.",
        "HTML provides semantic meaning to web content.",
        "Combine HTML with CSS for styling and JavaScript for interactivity.",
    ],
    example: "<div>\n    <h1>Title</h1>\n    <p>Content goes here</p>\n</div>",
    produces_visible_artifact: true,
};

static GENERIC_SCRIPT: ExplanationRecord = ExplanationRecord {
    summary: "This is JavaScript code that adds interactivity and dynamic behavior to web pages. JavaScript runs in the browser and can respond to user actions, modify HTML, and communicate with servers.",
    narrative: "You've written JavaScript code that adds functionality to your web page. This code can handle user interactions and manipulate page content.",
    tips: &[
        "JavaScript runs in the browser on the user's computer.",
        "JavaScript can respond to user events like clicks and typing.",
        "JavaScript can modify HTML and CSS dynamically.",
        "Always handle errors gracefully in your JavaScript code.",
    ],
    example: "console.log('Hello World');",
    produces_visible_artifact: false,
};
