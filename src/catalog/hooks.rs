//! Hook templates: vanilla-JavaScript renditions of the React hook
//! contracts. Bookkeeping lives in an explicit render context passed by
//! the caller, keyed by hook order, instead of module-level counters.

use super::CatalogEntry;

pub static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "use-state",
        title: "useState",
        description: "State slot keyed by hook order inside a caller-owned render context.",
        category: "State",
        difficulty: "Medium",
        code: r#"// A render context owns all hook slots for one component instance.
function createRenderContext() {
  return { slots: [], cursor: 0 };
}

function useState(ctx, initialValue) {
  const index = ctx.cursor++;
  if (ctx.slots[index] === undefined) {
    ctx.slots[index] = typeof initialValue === 'function' ? initialValue() : initialValue;
  }
  const setState = (next) => {
    const prev = ctx.slots[index];
    const value = typeof next === 'function' ? next(prev) : next;
    if (value !== prev) {
      ctx.slots[index] = value;
      console.log('state updated:', value);
    }
  };
  return [ctx.slots[index], setState];
}

// Simulate two renders of the same component.
const ctx = createRenderContext();
const [count, setCount] = useState(ctx, 0);
console.log('initial:', count);
setCount(5);
setCount((prev) => prev + 1);

ctx.cursor = 0; // re-render resets the cursor, not the slots
const rerender = useState(ctx, 0);
console.log('after re-render:', rerender[0]);"#,
        expected_output: "initial: 0\nstate updated: 5\nstate updated: 6\nafter re-render: 6",
    },
    CatalogEntry {
        id: "use-effect",
        title: "useEffect",
        description: "Runs an effect when its dependency list changes, cleaning up the previous run.",
        category: "Effects",
        difficulty: "Medium",
        code: r#"function createRenderContext() {
  return { effects: [], cursor: 0 };
}

function useEffect(ctx, effect, deps) {
  const index = ctx.cursor++;
  const previous = ctx.effects[index];
  const changed =
    !previous ||
    !deps ||
    deps.length !== previous.deps.length ||
    deps.some((dep, i) => dep !== previous.deps[i]);
  if (changed) {
    if (previous && previous.cleanup) {
      previous.cleanup();
    }
    const cleanup = effect();
    ctx.effects[index] = { deps: deps ? [...deps] : undefined, cleanup };
  }
}

const ctx = createRenderContext();

function render(userId) {
  ctx.cursor = 0;
  useEffect(ctx, () => {
    console.log('subscribe to user', userId);
    return () => console.log('unsubscribe from user', userId);
  }, [userId]);
}

render(1);
render(1); // same deps, effect skipped
render(2); // deps changed, cleanup then re-run"#,
        expected_output: "subscribe to user 1\nunsubscribe from user 1\nsubscribe to user 2",
    },
    CatalogEntry {
        id: "use-reducer",
        title: "useReducer",
        description: "Reducer-driven state slot with a dispatch function.",
        category: "State",
        difficulty: "Medium",
        code: r#"function createRenderContext() {
  return { slots: [], cursor: 0 };
}

function useReducer(ctx, reducer, initialState) {
  const index = ctx.cursor++;
  if (ctx.slots[index] === undefined) {
    ctx.slots[index] = initialState;
  }
  const dispatch = (action) => {
    const prev = ctx.slots[index];
    const next = reducer(prev, action);
    if (next !== prev) {
      ctx.slots[index] = next;
      console.log('state updated via reducer:', next);
    }
  };
  return [ctx.slots[index], dispatch];
}

function counter(state, action) {
  switch (action.type) {
    case 'increment':
      return state + 1;
    case 'decrement':
      return state - 1;
    default:
      return state;
  }
}

const ctx = createRenderContext();
const [state, dispatch] = useReducer(ctx, counter, 0);
console.log('initial:', state);
dispatch({ type: 'increment' });
dispatch({ type: 'increment' });
dispatch({ type: 'decrement' });
dispatch({ type: 'noop' });"#,
        expected_output: "initial: 0\nstate updated via reducer: 1\nstate updated via reducer: 2\nstate updated via reducer: 1",
    },
    CatalogEntry {
        id: "use-memo",
        title: "useMemo",
        description: "Caches a computed value until its dependency list changes.",
        category: "Performance",
        difficulty: "Medium",
        code: r#"function createRenderContext() {
  return { memos: [], cursor: 0 };
}

function useMemo(ctx, compute, deps) {
  const index = ctx.cursor++;
  const previous = ctx.memos[index];
  const changed =
    !previous ||
    deps.length !== previous.deps.length ||
    deps.some((dep, i) => dep !== previous.deps[i]);
  if (changed) {
    ctx.memos[index] = { value: compute(), deps: [...deps] };
  }
  return ctx.memos[index].value;
}

const ctx = createRenderContext();

function render(n) {
  ctx.cursor = 0;
  const squared = useMemo(ctx, () => {
    console.log('computing square of', n);
    return n * n;
  }, [n]);
  console.log('result:', squared);
}

render(3);
render(3); // cached
render(4); // recomputed"#,
        expected_output: "computing square of 3\nresult: 9\nresult: 9\ncomputing square of 4\nresult: 16",
    },
];
