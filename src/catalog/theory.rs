//! Theory reading material, split into a JavaScript track and a React
//! track. Bodies are markdown and go through the markdown printer.

use super::{Track, TheoryTopic};

pub static TOPICS: &[TheoryTopic] = &[
    // JavaScript track
    TheoryTopic {
        id: "closures",
        title: "Closures",
        track: Track::JavaScript,
        category: "Core Concepts",
        difficulty: "Medium",
        summary: "A function bundled with references to its surrounding lexical scope.",
        body: r#"# Closures

A closure is a function that retains access to the variables of the scope
it was created in, even after that scope has returned.

## Key points

- Every function in JavaScript forms a closure over its defining scope.
- Closed-over variables are captured by reference, not copied.
- Closures are the standard way to create private state.

## Example

```javascript
function makeCounter() {
  let count = 0;
  return () => ++count;
}

const next = makeCounter();
next(); // 1
next(); // 2
```

## Interview questions

1. Why does a `var` loop variable leak into every callback while `let` does not?
2. How would you implement a private counter without classes?
3. What keeps a closed-over variable alive after the outer function returns?
"#,
    },
    TheoryTopic {
        id: "prototypes",
        title: "Prototypes and Inheritance",
        track: Track::JavaScript,
        category: "Core Concepts",
        difficulty: "Medium",
        summary: "Property lookup walks the prototype chain; classes are sugar over it.",
        body: r#"# Prototypes and Inheritance

JavaScript objects delegate missing property lookups to their prototype,
forming a chain that ends at `null`.

## Key points

- `Object.create(proto)` builds an object with an explicit prototype.
- `class` syntax compiles down to constructor functions and prototype wiring.
- Own properties shadow inherited ones without modifying the prototype.

## Example

```javascript
const animal = {
  speak() {
    return `${this.name} makes a sound`;
  },
};

const dog = Object.create(animal);
dog.name = 'Rex';
dog.speak(); // "Rex makes a sound"
```

## Interview questions

1. What is the difference between `__proto__` and `prototype`?
2. How does `instanceof` decide its answer?
3. When does modifying a prototype affect existing objects?
"#,
    },
    TheoryTopic {
        id: "hoisting",
        title: "Hoisting",
        track: Track::JavaScript,
        category: "Core Concepts",
        difficulty: "Easy",
        summary: "Declarations are processed before execution; initializations are not.",
        body: r#"# Hoisting

Before a scope runs, the engine registers its declarations. `var` and
function declarations become usable immediately; `let` and `const` exist
but stay in the temporal dead zone until their declaration line.

## Key points

- `var` hoists with an initial value of `undefined`.
- Function declarations hoist with their body, function expressions do not.
- Accessing a `let`/`const` binding before its line throws a `ReferenceError`.

## Example

```javascript
console.log(a); // undefined
var a = 1;

console.log(b); // ReferenceError
let b = 2;
```

## Interview questions

1. Why does calling a function declaration above its definition work?
2. What exactly is the temporal dead zone?
3. How does hoisting differ inside a block versus a function body?
"#,
    },
    TheoryTopic {
        id: "this-keyword",
        title: "The this Keyword",
        track: Track::JavaScript,
        category: "Core Concepts",
        difficulty: "Medium",
        summary: "this is bound at call time by how a function is invoked, except in arrows.",
        body: r#"# The this Keyword

`this` is resolved when a function is called, not when it is defined.
Arrow functions are the exception: they capture `this` lexically.

## Binding rules, highest precedence first

1. `new` binds `this` to the freshly created object.
2. `call` / `apply` / `bind` set it explicitly.
3. Method call `obj.fn()` binds it to `obj`.
4. Plain call leaves it `undefined` in strict mode.

## Example

```javascript
const user = {
  name: 'Ada',
  hello() {
    return `hi ${this.name}`;
  },
};

const detached = user.hello;
user.hello();  // "hi Ada"
detached();    // TypeError in strict mode
```

## Interview questions

1. Why do arrow functions make bad object methods?
2. What does `bind` return and can it be re-bound?
3. How does `this` behave inside a callback passed to `forEach`?
"#,
    },
    TheoryTopic {
        id: "event-loop",
        title: "The Event Loop",
        track: Track::JavaScript,
        category: "Async",
        difficulty: "Hard",
        summary: "Single call stack plus task queues; microtasks drain before the next task.",
        body: r#"# The Event Loop

JavaScript runs one call stack. Asynchronous work is queued and the event
loop feeds it back in: one macrotask per turn, then the entire microtask
queue drains before anything else happens.

## Key points

- Promise callbacks are microtasks, timer callbacks are macrotasks.
- The microtask queue drains fully, including microtasks queued while draining.
- A long synchronous section blocks every queue.

## Example

```javascript
console.log('sync');
setTimeout(() => console.log('timer'), 0);
Promise.resolve().then(() => console.log('microtask'));
// sync, microtask, timer
```

## Interview questions

1. Why does a resolved promise callback still run asynchronously?
2. What happens if a microtask keeps scheduling more microtasks?
3. Where do `async`/`await` continuations run?
"#,
    },
    TheoryTopic {
        id: "async-await",
        title: "Async / Await",
        track: Track::JavaScript,
        category: "Async",
        difficulty: "Medium",
        summary: "Syntax over promises: await suspends the function until settlement.",
        body: r#"# Async / Await

An `async` function always returns a promise. `await` pauses the function
body until the awaited promise settles, without blocking the thread.

## Key points

- `await` on a rejected promise throws, so `try`/`catch` works naturally.
- Sequential awaits serialize; use `Promise.all` for independent work.
- Returning a value fulfills the function's promise with it.

## Example

```javascript
async function load() {
  try {
    const [a, b] = await Promise.all([fetchA(), fetchB()]);
    return a + b;
  } catch (err) {
    console.error('load failed:', err.message);
    throw err;
  }
}
```

## Interview questions

1. What does an `async` function return when its body returns a promise?
2. Why can sequential awaits be a performance bug?
3. How do unhandled rejections surface from async functions?
"#,
    },
    // React track
    TheoryTopic {
        id: "react-components",
        title: "Components and JSX",
        track: Track::React,
        category: "Fundamentals",
        difficulty: "Easy",
        summary: "Components are functions from props to UI description; JSX is sugar for element calls.",
        body: r#"# Components and JSX

A component is a function that takes props and returns a description of
UI. JSX compiles to plain function calls producing element objects.

## Key points

- Elements are cheap immutable descriptions, not DOM nodes.
- Component names must be capitalized so JSX treats them as components.
- Rendering is re-calling the function; React diffs the output.

## Example

```javascript
function Badge({ label }) {
  return <span className="badge">{label}</span>;
}
// compiles to: React.createElement('span', { className: 'badge' }, label)
```

## Interview questions

1. What is the difference between an element and a component instance?
2. Why must list items carry a stable `key`?
3. What makes a component pure and why does React care?
"#,
    },
    TheoryTopic {
        id: "state-props",
        title: "State vs Props",
        track: Track::React,
        category: "Fundamentals",
        difficulty: "Easy",
        summary: "Props flow in from the parent and are read-only; state is owned and mutable via setters.",
        body: r#"# State vs Props

Props are inputs a component receives and must not mutate. State is data
a component owns and changes over time through its setter.

## Key points

- Updating state schedules a re-render; mutating it in place does not.
- State updates may batch, so derive from the previous value with a function.
- Lifting state up moves shared data to the closest common ancestor.

## Example

```javascript
function Counter() {
  const [count, setCount] = useState(0);
  return <button onClick={() => setCount(c => c + 1)}>{count}</button>;
}
```

## Interview questions

1. Why is `setCount(count + 1)` twice in a row not `+2`?
2. When should derived data live in state versus be computed on render?
3. What problems does prop drilling cause and what are the remedies?
"#,
    },
    TheoryTopic {
        id: "react-hooks",
        title: "Rules of Hooks",
        track: Track::React,
        category: "Hooks",
        difficulty: "Medium",
        summary: "Hooks are slot-indexed by call order, which is why they cannot be conditional.",
        body: r#"# Rules of Hooks

React stores hook state in a list keyed by call order within the
component. That bookkeeping only works if every render calls the same
hooks in the same order.

## Key points

- Call hooks only at the top level, never inside conditions or loops.
- Call hooks only from components or other hooks.
- Custom hooks are just functions that call hooks; the rules compose.

## Example

```javascript
function useToggle(initial = false) {
  const [on, setOn] = useState(initial);
  const toggle = useCallback(() => setOn(v => !v), []);
  return [on, toggle];
}
```

## Interview questions

1. What breaks concretely when a hook call is made conditional?
2. How does React associate a `useState` call with its stored value?
3. What distinguishes a custom hook from a plain helper function?
"#,
    },
    TheoryTopic {
        id: "react-lifecycle",
        title: "Effects and Lifecycle",
        track: Track::React,
        category: "Hooks",
        difficulty: "Medium",
        summary: "useEffect synchronizes a component with external systems after render.",
        body: r#"# Effects and Lifecycle

`useEffect` runs after the render is committed. Its dependency array
decides when it re-runs, and its return value cleans up the previous run.

## Key points

- Empty deps run once on mount; no deps array runs after every render.
- Cleanup runs before the next effect execution and on unmount.
- Effects are for synchronizing with the outside world, not for computing render data.

## Example

```javascript
useEffect(() => {
  const socket = connect(roomId);
  return () => socket.close();
}, [roomId]);
```

## Interview questions

1. Why does a stale closure bug appear when deps are under-declared?
2. In what order do cleanup and the next effect run when deps change?
3. When is `useLayoutEffect` the right tool instead?
"#,
    },
    TheoryTopic {
        id: "react-performance",
        title: "Rendering Performance",
        track: Track::React,
        category: "Performance",
        difficulty: "Hard",
        summary: "Re-renders cascade down the tree; memoization cuts the cascade where it is measured to matter.",
        body: r#"# Rendering Performance

When a component re-renders, all of its children re-render by default.
`memo`, `useMemo`, and `useCallback` skip work when inputs are unchanged.

## Key points

- `React.memo` skips a child when its props are shallow-equal.
- `useCallback` keeps a function identity stable so memoized children stay skipped.
- Measure first: memoization adds comparison cost and complexity.

## Example

```javascript
const Row = React.memo(function Row({ item, onSelect }) {
  return <li onClick={() => onSelect(item.id)}>{item.label}</li>;
});

const onSelect = useCallback((id) => setSelected(id), []);
```

## Interview questions

1. Why does an inline object prop defeat `React.memo`?
2. What is the difference between `useMemo` and `useCallback`?
3. How do keys affect reconciliation cost for long lists?
"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tracks_are_populated() {
        assert!(TOPICS.iter().any(|t| t.track == Track::JavaScript));
        assert!(TOPICS.iter().any(|t| t.track == Track::React));
    }

    #[test]
    fn bodies_are_markdown_with_a_heading() {
        for topic in TOPICS {
            assert!(topic.body.starts_with("# "), "no heading: {}", topic.id);
            assert!(!topic.summary.is_empty(), "no summary: {}", topic.id);
        }
    }
}
