//! Machine-coding question bank. Each entry carries a reference solution
//! with its own inline test drive; try the exercise first, then run the
//! entry to compare.

use super::CatalogEntry;

pub static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "q-debounce",
        title: "Debounce Function",
        description: "Implement debounce(fn, delay): repeated calls within the delay window collapse into one trailing invocation. Requirements: cancel the pending timer on every call, forward the latest arguments, return a reusable wrapper.",
        category: "Frontend",
        difficulty: "Easy",
        code: r#"function debounce(fn, delay) {
  let pending;
  return function (...args) {
    clearTimeout(pending);
    pending = setTimeout(() => fn(...args), delay);
  };
}

// Test drive
const save = debounce((value) => console.log('saved:', value), 300);
save('a');
save('ab');
save('abc');"#,
        expected_output: "saved: abc",
    },
    CatalogEntry {
        id: "q-throttle",
        title: "Throttle Function",
        description: "Implement throttle(fn, interval) with an explicit clock parameter so the behavior is deterministic: a call runs only when at least `interval` has elapsed since the last accepted call.",
        category: "Frontend",
        difficulty: "Easy",
        code: r#"function throttle(fn, interval) {
  let last = -Infinity;
  return function (now, ...args) {
    if (now - last >= interval) {
      last = now;
      return fn(...args);
    }
  };
}

// Test drive with explicit tick values
const throttled = throttle((msg) => console.log('ran:', msg), 100);
throttled(0, 'first');
throttled(50, 'dropped');
throttled(120, 'second');
throttled(150, 'dropped again');
throttled(230, 'third');"#,
        expected_output: "ran: first\nran: second\nran: third",
    },
    CatalogEntry {
        id: "q-event-emitter",
        title: "Event Emitter",
        description: "Implement an emitter with on(event, listener), off(event, listener), and emit(event, ...args). Listeners fire in registration order; off removes only the given listener.",
        category: "System Design",
        difficulty: "Medium",
        code: r#"class EventEmitter {
  constructor() {
    this.listeners = {};
  }

  on(event, listener) {
    (this.listeners[event] = this.listeners[event] || []).push(listener);
    return this;
  }

  off(event, listener) {
    const list = this.listeners[event] || [];
    this.listeners[event] = list.filter((l) => l !== listener);
    return this;
  }

  emit(event, ...args) {
    (this.listeners[event] || []).forEach((listener) => listener(...args));
    return this;
  }
}

// Test drive
const emitter = new EventEmitter();
const greeter = (name) => console.log('hello', name);
emitter.on('greet', greeter);
emitter.on('greet', (name) => console.log('welcome', name));
emitter.emit('greet', 'Ada');
emitter.off('greet', greeter);
emitter.emit('greet', 'Grace');"#,
        expected_output: "hello Ada\nwelcome Ada\nwelcome Grace",
    },
    CatalogEntry {
        id: "q-promise-all",
        title: "Promise.all Implementation",
        description: "Implement promiseAll(promises): resolve with results in input order once every promise resolves; reject with the first rejection.",
        category: "Async",
        difficulty: "Medium",
        code: r#"function promiseAll(promises) {
  return new Promise((resolve, reject) => {
    const results = new Array(promises.length);
    let remaining = promises.length;
    if (remaining === 0) {
      resolve(results);
      return;
    }
    promises.forEach((promise, index) => {
      Promise.resolve(promise).then((value) => {
        results[index] = value;
        remaining -= 1;
        if (remaining === 0) {
          resolve(results);
        }
      }, reject);
    });
  });
}

// Test drive
promiseAll([
  Promise.resolve(1),
  Promise.resolve(2),
  3,
]).then((values) => console.log('resolved:', values.join(', ')));

promiseAll([
  Promise.resolve('ok'),
  Promise.reject(new Error('first failure')),
]).catch((err) => console.log('rejected:', err.message));"#,
        expected_output: "resolved: 1, 2, 3\nrejected: first failure",
    },
    CatalogEntry {
        id: "q-deep-clone",
        title: "Deep Clone Function",
        description: "Implement deepClone(value) for plain objects and arrays: the clone shares no structure with the source. Primitives pass through.",
        category: "Data Structures",
        difficulty: "Medium",
        code: r#"function deepClone(value) {
  if (value === null || typeof value !== 'object') {
    return value;
  }
  if (Array.isArray(value)) {
    return value.map(deepClone);
  }
  const clone = {};
  for (const key of Object.keys(value)) {
    clone[key] = deepClone(value[key]);
  }
  return clone;
}

// Test drive
const original = { name: 'config', nested: { retries: 3 }, tags: ['a', 'b'] };
const copy = deepClone(original);
copy.nested.retries = 99;
copy.tags.push('c');
console.log('original retries:', original.nested.retries);
console.log('copy retries:', copy.nested.retries);
console.log('original tags:', original.tags.join(','));
console.log('copy tags:', copy.tags.join(','));"#,
        expected_output: "original retries: 3\ncopy retries: 99\noriginal tags: a,b\ncopy tags: a,b,c",
    },
    CatalogEntry {
        id: "q-lru-cache",
        title: "LRU Cache Implementation",
        description: "Implement an LRU cache with get(key) and put(key, value) under a fixed capacity; both operations mark the key as most recently used, and put evicts the least recently used key when full.",
        category: "Data Structures",
        difficulty: "Hard",
        code: r#"class LRUCache {
  constructor(capacity) {
    this.capacity = capacity;
    this.entries = new Map();
  }

  get(key) {
    if (!this.entries.has(key)) {
      return -1;
    }
    const value = this.entries.get(key);
    this.entries.delete(key);
    this.entries.set(key, value);
    return value;
  }

  put(key, value) {
    if (this.entries.has(key)) {
      this.entries.delete(key);
    } else if (this.entries.size >= this.capacity) {
      const oldest = this.entries.keys().next().value;
      this.entries.delete(oldest);
    }
    this.entries.set(key, value);
  }
}

// Test drive
const cache = new LRUCache(2);
cache.put('a', 1);
cache.put('b', 2);
console.log(cache.get('a'));
cache.put('c', 3); // evicts 'b'
console.log(cache.get('b'));
console.log(cache.get('c'));"#,
        expected_output: "1\n-1\n3",
    },
];
