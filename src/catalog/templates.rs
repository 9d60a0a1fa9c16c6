//! Playground starter templates. These seed the editor with a skeleton;
//! none of them carries an expected output to check against.

use super::CatalogEntry;

pub static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "blank",
        title: "Blank Playground",
        description: "Empty scratchpad with a hello-world line to replace.",
        category: "Starter",
        difficulty: "Easy",
        code: "// Write your JavaScript code here\nconsole.log(\"Hello, World!\");",
        expected_output: "",
    },
    CatalogEntry {
        id: "template-polyfill",
        title: "Polyfill Skeleton",
        description: "Guard-and-assign shape for reimplementing a prototype method.",
        category: "Starter",
        difficulty: "Easy",
        code: r#"// Implement a polyfill, then exercise it below.
if (!Array.prototype.myMap) {
  Array.prototype.myMap = function (callback) {
    // your implementation
  };
}

const input = [1, 2, 3];
console.log(input.myMap(x => x * 2));"#,
        expected_output: "",
    },
    CatalogEntry {
        id: "template-algorithm",
        title: "Algorithm Skeleton",
        description: "Function stub plus a small test table for algorithm practice.",
        category: "Starter",
        difficulty: "Easy",
        code: r#"function solve(input) {
  // your implementation
  return input;
}

const cases = [
  [1, 2, 3],
  [],
  [42],
];

for (const testCase of cases) {
  console.log('input:', JSON.stringify(testCase), '->', JSON.stringify(solve(testCase)));
}"#,
        expected_output: "",
    },
    CatalogEntry {
        id: "template-async",
        title: "Async Skeleton",
        description: "Top-level await over a promise-returning helper.",
        category: "Starter",
        difficulty: "Easy",
        code: r#"const fetchData = (value) =>
  new Promise((resolve) => setTimeout(() => resolve(value), 100));

const result = await fetchData('loaded');
console.log(result);"#,
        expected_output: "",
    },
    CatalogEntry {
        id: "template-hook",
        title: "Hook Skeleton",
        description: "Render-context scaffold for writing a hook from scratch.",
        category: "Starter",
        difficulty: "Medium",
        code: r#"function createRenderContext() {
  return { slots: [], cursor: 0 };
}

function useState(ctx, initialValue) {
  // your implementation
}

const ctx = createRenderContext();
const [value, setValue] = useState(ctx, 'initial');
console.log(value);"#,
        expected_output: "",
    },
];
