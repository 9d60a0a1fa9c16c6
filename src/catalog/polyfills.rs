//! Polyfill registry: classic prototype-method reimplementations with an
//! inline test harness, adapted to run self-contained inside the sandbox.

use super::CatalogEntry;

pub static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "function-call",
        title: "Function.prototype.call",
        description: "Calls a function with a given this value and arguments provided individually.",
        category: "Function",
        difficulty: "Easy",
        code: r#"// Function.prototype.call polyfill implementation
if (!Function.prototype.call) {
  Function.prototype.call = function (context, ...args) {
    if (typeof this !== 'function') {
      throw new Error('context must be a function');
    }
    context = context || globalThis;
    context.fn = this;
    const result = context.fn(...args);
    delete context.fn;
    return result;
  };
}

// Test the implementation
function greet() {
  return `Hello, ${this.name}!`;
}

const person = { name: 'John' };
console.log(greet.call(person));"#,
        expected_output: "Hello, John!",
    },
    CatalogEntry {
        id: "function-apply",
        title: "Function.prototype.apply",
        description: "Calls a function with a given this value and arguments provided as an array.",
        category: "Function",
        difficulty: "Easy",
        code: r#"// Function.prototype.apply polyfill implementation
if (!Function.prototype.apply) {
  Function.prototype.apply = function (context, args) {
    if (typeof this !== 'function') {
      throw new Error('context must be a function');
    }
    context = context || globalThis;
    context.fn = this;
    const result = context.fn(...args);
    delete context.fn;
    return result;
  };
}

// Test the implementation
function sum(a, b, c) {
  return a + b + c;
}

console.log(sum.apply(null, [1, 2, 3]));"#,
        expected_output: "6",
    },
    CatalogEntry {
        id: "function-bind",
        title: "Function.prototype.bind",
        description: "Creates a new function with its this keyword bound, optionally pre-filling arguments.",
        category: "Function",
        difficulty: "Easy",
        code: r#"function greet(greeting) {
  return `${greeting}, ${this.name}!`;
}

const person = { name: 'Alice' };
const boundGreet = greet.bind(person);
console.log(boundGreet('Hello'));

// Partial application
function multiply(a, b) {
  return a * b;
}

const double = multiply.bind(null, 2);
console.log(double(5));"#,
        expected_output: "Hello, Alice!\n10",
    },
    CatalogEntry {
        id: "array-map",
        title: "Array.prototype.map",
        description: "Creates a new array with the results of calling a function for every element.",
        category: "Array",
        difficulty: "Easy",
        code: r#"// Array.prototype.map polyfill implementation
if (!Array.prototype.map) {
  Array.prototype.map = function (callback, thisArg) {
    if (typeof callback !== 'function') {
      throw new Error('callback must be a function');
    }
    let result = [];
    for (let i = 0; i < this.length; i++) {
      result.push(callback.call(thisArg, this[i], i, this));
    }
    return result;
  };
}

// Test the implementation
const numbers = [1, 2, 3, 4, 5];
const doubled = numbers.map(x => x * 2);
console.log(doubled);"#,
        expected_output: "[\n  2,\n  4,\n  6,\n  8,\n  10\n]",
    },
    CatalogEntry {
        id: "array-filter",
        title: "Array.prototype.filter",
        description: "Creates a new array with the elements that pass the provided predicate.",
        category: "Array",
        difficulty: "Easy",
        code: r#"// Array.prototype.filter polyfill implementation
if (!Array.prototype.filter) {
  Array.prototype.filter = function (predicate, thisArg) {
    if (typeof predicate !== 'function') {
      throw new Error('predicate must be a function');
    }
    let result = [];
    for (let i = 0; i < this.length; i++) {
      if (predicate.call(thisArg, this[i], i, this)) {
        result.push(this[i]);
      }
    }
    return result;
  };
}

// Test the implementation
const numbers = [1, 2, 3, 4, 5, 6];
const evens = numbers.filter(x => x % 2 === 0);
console.log(evens.join(', '));"#,
        expected_output: "2, 4, 6",
    },
    CatalogEntry {
        id: "array-reduce",
        title: "Array.prototype.reduce",
        description: "Runs a reducer over the array, folding it into a single value.",
        category: "Array",
        difficulty: "Medium",
        code: r#"// Array.prototype.reduce polyfill implementation
if (!Array.prototype.reduce) {
  Array.prototype.reduce = function (reducer, initialValue) {
    if (typeof reducer !== 'function') {
      throw new Error('reducer must be a function');
    }
    let index = 0;
    let accumulator = initialValue;
    if (accumulator === undefined) {
      if (this.length === 0) {
        throw new TypeError('Reduce of empty array with no initial value');
      }
      accumulator = this[index++];
    }
    for (; index < this.length; index++) {
      accumulator = reducer(accumulator, this[index], index, this);
    }
    return accumulator;
  };
}

// Test the implementation
const numbers = [1, 2, 3, 4, 5];
console.log(numbers.reduce((acc, curr) => acc + curr, 0));
console.log(numbers.reduce((acc, curr) => (curr > acc ? curr : acc)));"#,
        expected_output: "15\n5",
    },
    CatalogEntry {
        id: "promise-all",
        title: "Promise.all",
        description: "Resolves when all input promises resolve, preserving input order.",
        category: "Other",
        difficulty: "Medium",
        code: r#"const delay = (ms, value) => new Promise(resolve =>
  setTimeout(() => resolve(value), ms)
);

Promise.all([
  delay(100, 'First'),
  delay(200, 'Second'),
  delay(50, 'Third')
]).then(results => {
  console.log(results.join(', '));
});"#,
        expected_output: "First, Second, Third",
    },
    CatalogEntry {
        id: "debounce",
        title: "Debounce Function",
        description: "Delays execution until a quiet period has passed since the last invocation.",
        category: "Other",
        difficulty: "Easy",
        code: r#"function debounce(fn, delay) {
  let pending;
  return function (...args) {
    clearTimeout(pending);
    pending = setTimeout(() => fn(...args), delay);
  };
}

function search(query) {
  console.log('Searching for:', query);
}

const debouncedSearch = debounce(search, 300);
debouncedSearch('a');
debouncedSearch('ab');
debouncedSearch('abc');
setTimeout(() => console.log('Done'), 500);"#,
        expected_output: "Searching for: abc\nDone",
    },
];
