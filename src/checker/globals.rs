//! Global identifier names defined by JavaScript runtimes and common test
//! and scripting environments. Sources that reference these names are not
//! misspelled, whatever the dictionary says about their parts.

pub const BUILTIN: &[&str] = &[
    "AggregateError",
    "Array",
    "ArrayBuffer",
    "Atomics",
    "BigInt",
    "BigInt64Array",
    "BigUint64Array",
    "Boolean",
    "DataView",
    "Date",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "Error",
    "escape",
    "eval",
    "EvalError",
    "FinalizationRegistry",
    "Float32Array",
    "Float64Array",
    "Function",
    "globalThis",
    "Infinity",
    "Int16Array",
    "Int32Array",
    "Int8Array",
    "Intl",
    "isFinite",
    "isNaN",
    "JSON",
    "Map",
    "Math",
    "NaN",
    "Number",
    "Object",
    "parseFloat",
    "parseInt",
    "Promise",
    "Proxy",
    "RangeError",
    "ReferenceError",
    "Reflect",
    "RegExp",
    "Set",
    "SharedArrayBuffer",
    "String",
    "Symbol",
    "SyntaxError",
    "TypeError",
    "Uint16Array",
    "Uint32Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "undefined",
    "unescape",
    "URIError",
    "WeakMap",
    "WeakRef",
    "WeakSet",
];

pub const BROWSER: &[&str] = &[
    "AbortController",
    "AbortSignal",
    "addEventListener",
    "alert",
    "AnimationEvent",
    "atob",
    "Audio",
    "AudioContext",
    "Blob",
    "blur",
    "btoa",
    "BroadcastChannel",
    "caches",
    "cancelAnimationFrame",
    "cancelIdleCallback",
    "CanvasRenderingContext2D",
    "CharacterData",
    "clearInterval",
    "clearTimeout",
    "ClipboardEvent",
    "close",
    "closed",
    "CloseEvent",
    "Comment",
    "CompositionEvent",
    "confirm",
    "console",
    "createImageBitmap",
    "crypto",
    "CSS",
    "CSSStyleDeclaration",
    "CSSStyleSheet",
    "customElements",
    "CustomEvent",
    "devicePixelRatio",
    "dispatchEvent",
    "document",
    "Document",
    "DocumentFragment",
    "DOMException",
    "DOMParser",
    "DOMRect",
    "DOMTokenList",
    "DragEvent",
    "Element",
    "ErrorEvent",
    "event",
    "Event",
    "EventSource",
    "EventTarget",
    "external",
    "fetch",
    "File",
    "FileList",
    "FileReader",
    "find",
    "focus",
    "FocusEvent",
    "FormData",
    "frameElement",
    "frames",
    "getComputedStyle",
    "getSelection",
    "HashChangeEvent",
    "Headers",
    "history",
    "History",
    "HTMLAnchorElement",
    "HTMLButtonElement",
    "HTMLCanvasElement",
    "HTMLCollection",
    "HTMLDivElement",
    "HTMLDocument",
    "HTMLElement",
    "HTMLFormElement",
    "HTMLIFrameElement",
    "HTMLImageElement",
    "HTMLInputElement",
    "HTMLSelectElement",
    "HTMLSpanElement",
    "HTMLTemplateElement",
    "HTMLTextAreaElement",
    "HTMLVideoElement",
    "IDBDatabase",
    "IDBKeyRange",
    "Image",
    "ImageData",
    "indexedDB",
    "innerHeight",
    "innerWidth",
    "InputEvent",
    "IntersectionObserver",
    "isSecureContext",
    "KeyboardEvent",
    "length",
    "localStorage",
    "location",
    "Location",
    "locationbar",
    "matchMedia",
    "MediaQueryList",
    "MediaRecorder",
    "MediaStream",
    "menubar",
    "MessageChannel",
    "MessageEvent",
    "MessagePort",
    "MouseEvent",
    "moveBy",
    "moveTo",
    "MutationObserver",
    "name",
    "navigator",
    "Navigator",
    "Node",
    "NodeFilter",
    "NodeList",
    "Notification",
    "offscreenBuffering",
    "onbeforeunload",
    "onblur",
    "onchange",
    "onclick",
    "onerror",
    "onfocus",
    "onhashchange",
    "oninput",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onmessage",
    "onmousedown",
    "onmousemove",
    "onmouseup",
    "onpagehide",
    "onpageshow",
    "onpopstate",
    "onresize",
    "onscroll",
    "onstorage",
    "onsubmit",
    "onunload",
    "open",
    "opener",
    "Option",
    "origin",
    "outerHeight",
    "outerWidth",
    "PageTransitionEvent",
    "pageXOffset",
    "pageYOffset",
    "parent",
    "Path2D",
    "performance",
    "Performance",
    "personalbar",
    "PointerEvent",
    "PopStateEvent",
    "postMessage",
    "print",
    "ProgressEvent",
    "prompt",
    "queueMicrotask",
    "Range",
    "releaseEvents",
    "removeEventListener",
    "Request",
    "requestAnimationFrame",
    "requestIdleCallback",
    "resizeBy",
    "ResizeObserver",
    "resizeTo",
    "Response",
    "screen",
    "Screen",
    "screenLeft",
    "screenTop",
    "screenX",
    "screenY",
    "scroll",
    "scrollbars",
    "scrollBy",
    "scrollTo",
    "scrollX",
    "scrollY",
    "Selection",
    "self",
    "sessionStorage",
    "setInterval",
    "setTimeout",
    "ShadowRoot",
    "SharedWorker",
    "speechSynthesis",
    "status",
    "statusbar",
    "stop",
    "Storage",
    "StorageEvent",
    "structuredClone",
    "SubmitEvent",
    "SVGElement",
    "SVGSVGElement",
    "Text",
    "TextDecoder",
    "TextEncoder",
    "toolbar",
    "top",
    "Touch",
    "TouchEvent",
    "TransitionEvent",
    "TreeWalker",
    "UIEvent",
    "URL",
    "URLSearchParams",
    "visualViewport",
    "WebGLRenderingContext",
    "WebSocket",
    "WheelEvent",
    "window",
    "Window",
    "Worker",
    "XMLDocument",
    "XMLHttpRequest",
    "XMLSerializer",
    "XPathResult",
];

pub const NODE: &[&str] = &[
    "__dirname",
    "__filename",
    "AbortController",
    "AbortSignal",
    "Buffer",
    "clearImmediate",
    "clearInterval",
    "clearTimeout",
    "console",
    "exports",
    "fetch",
    "global",
    "Intl",
    "module",
    "process",
    "queueMicrotask",
    "require",
    "setImmediate",
    "setInterval",
    "setTimeout",
    "structuredClone",
    "TextDecoder",
    "TextEncoder",
    "URL",
    "URLSearchParams",
    "WebAssembly",
];

pub const MOCHA: &[&str] = &[
    "after",
    "afterEach",
    "before",
    "beforeEach",
    "context",
    "describe",
    "it",
    "mocha",
    "run",
    "setup",
    "specify",
    "suite",
    "suiteSetup",
    "suiteTeardown",
    "teardown",
    "test",
    "xcontext",
    "xdescribe",
    "xit",
    "xspecify",
];

pub const JASMINE: &[&str] = &[
    "afterAll",
    "afterEach",
    "beforeAll",
    "beforeEach",
    "describe",
    "expect",
    "expectAsync",
    "fail",
    "fdescribe",
    "fit",
    "it",
    "jasmine",
    "pending",
    "runs",
    "spyOn",
    "spyOnAllFunctions",
    "spyOnProperty",
    "waits",
    "waitsFor",
    "xdescribe",
    "xit",
];

pub const JQUERY: &[&str] = &["$", "jQuery"];

pub const SHELLJS: &[&str] = &[
    "cat", "cd", "chmod", "config", "cp", "dirs", "echo", "env", "error", "exec", "exit", "find",
    "grep", "ln", "ls", "mkdir", "mv", "popd", "pushd", "pwd", "rm", "sed", "set", "target",
    "tempdir", "test", "touch", "which",
];

/// Every table above, in a fixed order.
pub fn all() -> impl Iterator<Item = &'static str> {
    [BUILTIN, BROWSER, NODE, MOCHA, JASMINE, JQUERY, SHELLJS]
        .into_iter()
        .flat_map(|table| table.iter().copied())
}
